pub const APP_NAME: &str = "Trade Value Calculator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

/// `User-Agent` sent with catalog requests.
pub fn user_agent() -> String {
    format!("trade-value-calculator/{}", version_label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_never_empty() {
        let label = version_label();
        assert!(!label.is_empty());
        assert!(user_agent().ends_with(&label));
    }
}
