//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the report for `query`; the result must echo `seq`
    FetchWeather { seq: u64, query: String },
    /// Open a page in the system browser
    OpenUrl(String),
}
