//! Account-level marketing endpoints under `marketing/`.

use crate::resource::ResourceDescriptor;

/// Fetch the account name of the current RD Station Marketing account.
pub fn account_info() -> ResourceDescriptor {
    ResourceDescriptor::get("marketing/account_info")
}

/// Fetch the tracking code loader script reference.
pub fn tracking_code() -> ResourceDescriptor {
    ResourceDescriptor::get("marketing/tracking_code")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marketing_paths() {
        assert_eq!(account_info().path, "marketing/account_info");
        assert_eq!(tracking_code().path, "marketing/tracking_code");
    }
}
