use async_trait::async_trait;

use crate::modules::profile::application::ports::outgoing::profile_source::ProfileSource;
use crate::modules::profile::domain::entities::Profile;

/// The authored profile defaults.
#[derive(Clone, Default)]
pub struct SeedProfileSource;

impl SeedProfileSource {
    pub fn profile() -> Profile {
        Profile {
            full_name: "Cyuzuzo Samuel".to_string(),
            location: "Musanze, Rwanda".to_string(),
            university: "INES - Ruhengeri".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "Computer Science, SWE".to_string(),
            year_of_study: "Year 3".to_string(),
            email: "ug23/20854@ines.ac.rw".to_string(),
            phone: "+250 788 123 456".to_string(),
            github_url: "https://github.com/cyuzuzocyisezerano".to_string(),
            linkedin_url: "https://www.linkedin.com/in/cyuzuzo-samuel-31871918b/".to_string(),
            about: "I'm a passionate software engineer focused on web development with \
                    skills in PHP, CSS, HTML, and JavaScript. I strive to create innovative \
                    and user-friendly solutions that make a positive impact. Currently in my \
                    third year of Computer Science, I'm developing expertise in AI and \
                    machine learning applications for real-world problems. I'm particularly \
                    excited about how technology can be leveraged to create solutions for \
                    local communities in Rwanda."
                .to_string(),
        }
    }
}

#[async_trait]
impl ProfileSource for SeedProfileSource {
    async fn profile(&self) -> Profile {
        Self::profile()
    }
}
