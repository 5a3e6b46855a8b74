//! Shared helpers for the factories.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next value of a process-wide counter, used to keep default names unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a league with one season.
pub async fn create_league_with_season(
    db: &DatabaseConnection,
) -> Result<(entity::league::Model, entity::season::Model), DbErr> {
    let league = crate::factory::league::create_league(db).await?;
    let season = crate::factory::season::create_season(db, league.id).await?;

    Ok((league, season))
}

/// Creates a league, a season and two teams coached by fresh users, then a match between
/// them.
///
/// # Returns
/// - `Ok((league, season, home, away, match))`
pub async fn create_match_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::league::Model,
        entity::season::Model,
        entity::team::Model,
        entity::team::Model,
        entity::league_match::Model,
    ),
    DbErr,
> {
    let (league, season) = create_league_with_season(db).await?;
    let home_coach = crate::factory::user::create_user(db).await?;
    let away_coach = crate::factory::user::create_user(db).await?;
    let home = crate::factory::team::create_team(db, &season, home_coach.id).await?;
    let away = crate::factory::team::create_team(db, &season, away_coach.id).await?;
    let league_match = crate::factory::league_match::create_match(db, &home, &away).await?;

    Ok((league, season, home, away, league_match))
}
