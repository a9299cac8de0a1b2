/// A programming skill with its proficiency rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: String,
    /// Proficiency on a 0..=100 scale.
    pub rating: u8,
}

impl Skill {
    /// Rating capped at 100 so the progress bar width stays valid even
    /// if a seed entry is ever mistyped.
    pub fn rating_percent(&self) -> u8 {
        self.rating.min(100)
    }
}

/// One certification or achievement line on the Skills view.
#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_percent_caps_at_one_hundred() {
        let skill = Skill {
            name: "Python".to_string(),
            rating: 90,
        };
        assert_eq!(skill.rating_percent(), 90);

        let overflowing = Skill {
            name: "Typo".to_string(),
            rating: 130,
        };
        assert_eq!(overflowing.rating_percent(), 100);
    }
}
