use super::*;

use chrono::{Duration, Utc};
use keel_core::conn_str;

fn connection(name: &str) -> SavedConnection {
    let descriptor = conn_str::parse("postgresql://svc@db.example.com:5432/app").unwrap();
    SavedConnection::from_descriptor(name, &descriptor)
}

mod crud_tests {
    use super::*;

    #[test]
    fn add_and_get() {
        let store = ConnectionStore::new();
        assert!(store.is_empty());

        let profile = connection("prod");
        let id = profile.id;
        store.add(profile);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().name, "prod");
        assert_eq!(store.get(Uuid::new_v4()), None);
    }

    #[test]
    fn update_replaces_the_stored_profile() {
        let store = ConnectionStore::new();
        let mut profile = connection("prod");
        let id = profile.id;
        store.add(profile.clone());

        profile.name = "prod-replica".to_string();
        profile.port = 6432;
        store.update(profile).unwrap();

        let fetched = store.get(id).unwrap();
        assert_eq!(fetched.name, "prod-replica");
        assert_eq!(fetched.port, 6432);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = ConnectionStore::new();
        let err = store.update(connection("ghost")).unwrap_err();
        assert!(matches!(err, KeelError::NotFound(_)));
    }

    #[test]
    fn remove_returns_the_profile() {
        let store = ConnectionStore::new();
        let profile = connection("prod");
        let id = profile.id;
        store.add(profile);

        let removed = store.remove(id).unwrap();
        assert_eq!(removed.name, "prod");
        assert!(store.is_empty());

        let err = store.remove(id).unwrap_err();
        assert!(matches!(err, KeelError::NotFound(_)));
    }
}

mod ordering_tests {
    use super::*;

    #[test]
    fn list_puts_recently_used_first() {
        let store = ConnectionStore::new();
        let mut a = connection("a");
        let mut b = connection("b");
        let c = connection("c");
        a.last_used_at = Some(Utc::now() - Duration::minutes(10));
        b.last_used_at = Some(Utc::now());

        store.add(a);
        store.add(b);
        store.add(c);

        let names: Vec<String> = store.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn never_used_profiles_sort_newest_created_first() {
        let store = ConnectionStore::new();
        let mut old = connection("old");
        let new = connection("new");
        old.created_at = Utc::now() - Duration::days(2);

        store.add(old);
        store.add(new);

        let names: Vec<String> = store.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["new", "old"]);
    }

    #[test]
    fn touch_moves_a_profile_to_the_front() {
        let store = ConnectionStore::new();
        let a = connection("a");
        let b = connection("b");
        let b_id = b.id;

        store.add(a);
        store.add(b);
        store.touch(b_id).unwrap();

        assert_eq!(store.list()[0].name, "b");
        assert!(store.get(b_id).unwrap().last_used_at.is_some());
    }

    #[test]
    fn touch_unknown_id_is_not_found() {
        let store = ConnectionStore::new();
        assert!(matches!(store.touch(Uuid::new_v4()), Err(KeelError::NotFound(_))));
    }
}

mod naming_tests {
    use super::*;

    #[test]
    fn names_collects_every_stored_name() {
        let store = ConnectionStore::new();
        store.add(connection("prod"));
        store.add(connection("staging"));

        let names = store.names();
        assert_eq!(names.len(), 2);
        assert!(names.contains("prod"));
        assert!(names.contains("staging"));
    }

    #[test]
    fn suggested_name_is_not_taken() {
        let store = ConnectionStore::new();
        store.add(connection("prod"));

        let suggested = store.suggest_name();
        assert!(!suggested.is_empty());
        assert!(!store.names().contains(&suggested));
    }
}
