/// One milestone on the academic and project timeline. The date is a
/// display label, never parsed or sorted on; the seed list is already
/// in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    pub description: String,
}
