#[cfg(test)]
mod tests {
    use dayplan::db::users::Users;
    use dayplan::libs::errors::PlannerError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct UserTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for UserTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            UserTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_register_returns_account_with_id(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        let user = users.register("alice_register", "correct horse").unwrap();
        assert!(user.id.is_some());
        assert_eq!(user.username, "alice_register");

        // Only the digest is stored, never the raw password
        assert_ne!(user.password_hash, "correct horse");
        assert!(user.password_hash.starts_with("$argon2id$"));
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_register_duplicate_username_rejected(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        users.register("bob_duplicate", "first password").unwrap();
        let err = users.register("bob_duplicate", "other password").unwrap_err();

        match err {
            PlannerError::DuplicateUser(name) => assert_eq!(name, "bob_duplicate"),
            other => panic!("expected DuplicateUser, got {:?}", other),
        }

        // The original account is untouched
        let stored = users.get_by_username("bob_duplicate").unwrap().unwrap();
        assert!(dayplan::libs::auth::verify_password("first password", &stored.password_hash).unwrap());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_same_password_different_digests(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        let first = users.register("carol_salt", "shared secret").unwrap();
        let second = users.register("dave_salt", "shared secret").unwrap();

        // Salts are generated per account, so equal passwords never
        // produce equal digests
        assert_ne!(first.password_hash, second.password_hash);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_get_by_username(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        assert!(users.get_by_username("erin_lookup").unwrap().is_none());

        let created = users.register("erin_lookup", "some password").unwrap();
        let found = users.get_by_username("erin_lookup").unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.username, "erin_lookup");
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_get_by_id(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        let created = users.register("frank_by_id", "some password").unwrap();
        let id = created.id.unwrap();

        let found = users.get_by_id(id).unwrap().unwrap();
        assert_eq!(found.username, "frank_by_id");

        assert!(users.get_by_id(id + 100_000).unwrap().is_none());
    }
}
