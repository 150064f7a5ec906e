/// 会话缓存键
pub fn session_key(token: &str) -> String {
    format!("session:{}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_key_uses_token_suffix() {
        assert_eq!(session_key("abc"), "session:abc");
    }
}
