/// A published testimonial. The author line carries the name and the
/// title or position as one display string.
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub author: String,
    pub body: String,
}
