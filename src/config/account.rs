pub const DEFAULT_ACCOUNT: &str = "default";

pub fn resolve_account(requested: &str) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return DEFAULT_ACCOUNT.to_string();
    }

    trimmed.to_string()
}
