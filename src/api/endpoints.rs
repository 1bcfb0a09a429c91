pub fn profile_endpoint() -> &'static str {
    "/profile"
}
