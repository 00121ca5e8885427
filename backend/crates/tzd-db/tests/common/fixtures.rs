use tzd_core::UserUpdate;
use tzd_db::UserRepository;

/// Seeds a record with the given fields through the public upsert path
pub async fn seed_user(
    repo: &UserRepository,
    identity: &str,
    timezone: Option<&str>,
    languages: Option<&str>,
    is_operator: bool,
) {
    let mut update = UserUpdate::new().operator(is_operator);
    if let Some(tz) = timezone {
        update = update.timezone(tz);
    }
    if let Some(langs) = languages {
        update = update.languages(langs);
    }

    repo.upsert(identity, &update)
        .await
        .expect("Failed to seed user");
}
