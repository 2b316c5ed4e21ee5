//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Look up current weather for a city; `request` tags the completion
    FetchWeather { city: String, request: u64 },
}
