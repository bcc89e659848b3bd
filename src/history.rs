//! Roll history stored in SQLite, and the statistics and leaderboards computed from it.
//!
//! Every public operation opens its own connection and closes it before returning.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Datelike, Days, NaiveTime, SecondsFormat, Utc};
use log::debug;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, FromRow, SqliteConnection};

use crate::champions::Role;
use crate::dice::{D20, RollOutcome};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS rolls (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    username TEXT NOT NULL,
    roll_value INTEGER NOT NULL,
    role TEXT,
    champion TEXT,
    timestamp TEXT NOT NULL
)";

/// Minimum number of rolls before a ratio or an average is ranked
pub const MIN_SAMPLE: i64 = 5;

/// A roll about to be recorded
#[derive(Debug, Clone, Copy)]
pub struct NewRoll<'a> {
    pub user_id: u64,
    pub username: &'a str,
    pub die: D20,
    pub role: Option<Role>,
    pub champion: Option<&'a str>,
}

impl<'a> NewRoll<'a> {
    pub fn from_outcome(user_id: u64, username: &'a str, outcome: &'a RollOutcome) -> Self {
        Self {
            user_id,
            username,
            die: outcome.die,
            role: outcome.scope,
            champion: outcome.champion.as_deref(),
        }
    }
}

/// A recorded roll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollEvent {
    pub id: i64,
    pub user_id: u64,
    pub username: String,
    pub die: D20,
    pub role: Option<Role>,
    pub champion: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(FromRow)]
struct RollRow {
    id: i64,
    user_id: i64,
    username: String,
    roll_value: i64,
    role: Option<String>,
    champion: Option<String>,
    timestamp: String,
}

impl TryFrom<RollRow> for RollEvent {
    type Error = anyhow::Error;

    fn try_from(row: RollRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            user_id: u64::try_from(row.user_id)?,
            username: row.username,
            die: D20::new(u8::try_from(row.roll_value)?)?,
            role: row.role.as_deref().and_then(Role::from_key),
            champion: row.champion,
            timestamp: DateTime::parse_from_rfc3339(&row.timestamp)?.with_timezone(&Utc),
        })
    }
}

/// Aggregates over every roll of one user
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub total: i64,
    pub nat20s: i64,
    pub nat1s: i64,
    pub average: f64,
    pub today: i64,
    pub this_week: i64,

    /// Most drawn champion and how many times it was drawn
    pub favourite: Option<(String, i64)>,

    /// Position on the total rolls leaderboard
    pub rank: Option<usize>,

    pub last: Option<RollEvent>,
}

impl UserStats {
    pub fn luck_percent(&self) -> f64 {
        percent(self.nat20s, self.total)
    }

    pub fn unluck_percent(&self) -> f64 {
        percent(self.nat1s, self.total)
    }
}

fn percent(part: i64, total: i64) -> f64 {
    if total == 0 { 0.0 } else { 100.0 * part as f64 / total as f64 }
}

/// Rows taken into account by a leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    AllTime,

    /// Since midnight UTC
    Today,

    /// Since Monday midnight UTC
    ThisWeek,
}

impl Window {
    /// Lower bound on the stored timestamp, compared lexically.
    fn since(self, now: DateTime<Utc>) -> String {
        match self {
            Self::AllTime => String::new(),
            Self::Today => stamp(start_of_day(now)),
            Self::ThisWeek => stamp(start_of_week(now)),
        }
    }
}

fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn start_of_week(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
    monday.and_time(NaiveTime::MIN).and_utc()
}

/// Fixed-width UTC timestamp, so that lexical order is chronological order
fn stamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// How a leaderboard value is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Count,
    Percent,
    Average,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Count => format!("{value:.0}"),
            Self::Percent => format!("{value:.1}%"),
            Self::Average => format!("{value:.2}"),
        }
    }
}

/// Ranking metrics available on the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum Category {
    #[name = "total_rolls"]
    TotalRolls,

    #[name = "nat20s"]
    Nat20s,

    #[name = "nat1s"]
    Nat1s,

    #[name = "luckiest"]
    Luckiest,

    #[name = "unluckiest"]
    Unluckiest,

    #[name = "highest_average"]
    HighestAverage,

    #[name = "today"]
    Today,

    #[name = "this_week"]
    ThisWeek,
}

/// Query template and display settings of a [`Category`]
#[derive(Debug)]
pub struct CategorySpec {
    pub category: Category,
    pub title: &'static str,

    /// Aggregate expression over the rows of one user, ranked in descending order
    metric: &'static str,

    /// Users with fewer rolls in the window are not ranked
    pub min_rolls: i64,

    pub window: Window,
    pub format: ValueFormat,
}

/// Indexed by `Category as usize`
static CATEGORIES: [CategorySpec; 8] = [
    CategorySpec {
        category: Category::TotalRolls,
        title: "Most rolls",
        metric: "COUNT(*)",
        min_rolls: 1,
        window: Window::AllTime,
        format: ValueFormat::Count,
    },
    CategorySpec {
        category: Category::Nat20s,
        title: "Most natural 20s",
        metric: "SUM(roll_value = 20)",
        min_rolls: 1,
        window: Window::AllTime,
        format: ValueFormat::Count,
    },
    CategorySpec {
        category: Category::Nat1s,
        title: "Most natural 1s",
        metric: "SUM(roll_value = 1)",
        min_rolls: 1,
        window: Window::AllTime,
        format: ValueFormat::Count,
    },
    CategorySpec {
        category: Category::Luckiest,
        title: "Luckiest (natural 20 rate)",
        metric: "100.0 * SUM(roll_value = 20) / COUNT(*)",
        min_rolls: MIN_SAMPLE,
        window: Window::AllTime,
        format: ValueFormat::Percent,
    },
    CategorySpec {
        category: Category::Unluckiest,
        title: "Unluckiest (natural 1 rate)",
        metric: "100.0 * SUM(roll_value = 1) / COUNT(*)",
        min_rolls: MIN_SAMPLE,
        window: Window::AllTime,
        format: ValueFormat::Percent,
    },
    CategorySpec {
        category: Category::HighestAverage,
        title: "Highest average roll",
        metric: "AVG(roll_value)",
        min_rolls: MIN_SAMPLE,
        window: Window::AllTime,
        format: ValueFormat::Average,
    },
    CategorySpec {
        category: Category::Today,
        title: "Most rolls today",
        metric: "COUNT(*)",
        min_rolls: 1,
        window: Window::Today,
        format: ValueFormat::Count,
    },
    CategorySpec {
        category: Category::ThisWeek,
        title: "Most rolls this week",
        metric: "COUNT(*)",
        min_rolls: 1,
        window: Window::ThisWeek,
        format: ValueFormat::Count,
    },
];

impl Category {
    pub fn spec(self) -> &'static CategorySpec {
        &CATEGORIES[self as usize]
    }
}

impl CategorySpec {
    /// One row per eligible user: `user_id`, `value`, `rolls`.
    ///
    /// Binds: window lower bound, minimum roll count.
    fn scores_query(&self) -> String {
        format!(
            "SELECT user_id, CAST({} AS REAL) AS value, COUNT(*) AS rolls FROM rolls WHERE timestamp >= ? GROUP BY \
             user_id HAVING COUNT(*) >= ?",
            self.metric
        )
    }
}

/// One line of a leaderboard
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// Starts at 1
    pub rank: usize,
    pub user_id: u64,

    /// Most recent username of the user
    pub username: String,

    pub value: f64,
    pub rolls: i64,
}

#[derive(FromRow)]
struct LeaderboardRow {
    user_id: i64,
    username: String,
    value: f64,
    rolls: i64,
}

fn db_id(user_id: u64) -> Result<i64> {
    Ok(i64::try_from(user_id)?)
}

/// Handle on the roll history database
#[derive(Debug, Clone)]
pub struct RollStore {
    path: PathBuf,
}

impl RollStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the database, creating the file and the table when missing.
    async fn connect(&self) -> Result<SqliteConnection> {
        let options = SqliteConnectOptions::new().filename(&self.path).create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options).await?;
        sqlx::query(SCHEMA).execute(&mut conn).await?;
        Ok(conn)
    }

    /// Creates the database ahead of the first command.
    pub async fn init(&self) -> Result<()> {
        self.connect().await?.close().await?;
        Ok(())
    }

    /// Appends a roll and returns its id.
    pub async fn record(&self, roll: NewRoll<'_>, at: DateTime<Utc>) -> Result<i64> {
        let mut conn = self.connect().await?;
        let id = sqlx::query(
            "INSERT INTO rolls (user_id, username, roll_value, role, champion, timestamp) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(db_id(roll.user_id)?)
        .bind(roll.username)
        .bind(i64::from(roll.die.value()))
        .bind(roll.role.map(Role::key))
        .bind(roll.champion)
        .bind(stamp(at))
        .execute(&mut conn)
        .await?
        .last_insert_rowid();
        conn.close().await?;

        debug!("Recorded roll #{id} of {} for user {}", roll.die, roll.user_id);
        Ok(id)
    }

    /// Statistics of a user, or `None` when they never rolled.
    pub async fn stats(&self, user_id: u64, now: DateTime<Utc>) -> Result<Option<UserStats>> {
        let mut conn = self.connect().await?;
        let stats = stats(&mut conn, user_id, now).await;
        conn.close().await?;
        stats
    }

    /// Top `limit` users for `category`.
    pub async fn leaderboard(&self, category: Category, limit: usize, now: DateTime<Utc>) -> Result<Vec<LeaderboardEntry>> {
        let mut conn = self.connect().await?;
        let entries = leaderboard(&mut conn, category, limit, now).await;
        conn.close().await?;
        entries
    }

    /// Position of a user for `category`, or `None` when they are not ranked.
    ///
    /// Users with the same value share the same rank.
    pub async fn rank_of(&self, category: Category, user_id: u64, now: DateTime<Utc>) -> Result<Option<usize>> {
        let mut conn = self.connect().await?;
        let rank = rank_of(&mut conn, category, user_id, now).await;
        conn.close().await?;
        rank
    }
}

/// Last `limit` rolls of a user, most recent first.
async fn recent(conn: &mut SqliteConnection, user_id: u64, limit: usize) -> Result<Vec<RollEvent>> {
    let rows: Vec<RollRow> = sqlx::query_as(
        "SELECT id, user_id, username, roll_value, role, champion, timestamp FROM rolls WHERE user_id = ? ORDER BY id \
         DESC LIMIT ?",
    )
    .bind(db_id(user_id)?)
    .bind(i64::try_from(limit)?)
    .fetch_all(&mut *conn)
    .await?;

    rows.into_iter().map(RollEvent::try_from).collect()
}

async fn stats(conn: &mut SqliteConnection, user_id: u64, now: DateTime<Utc>) -> Result<Option<UserStats>> {
    let (total, nat20s, nat1s, average, today, this_week): (i64, i64, i64, Option<f64>, i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COALESCE(SUM(roll_value = 20), 0), COALESCE(SUM(roll_value = 1), 0), AVG(roll_value), \
         COALESCE(SUM(timestamp >= ?), 0), COALESCE(SUM(timestamp >= ?), 0) FROM rolls WHERE user_id = ?",
    )
    .bind(Window::Today.since(now))
    .bind(Window::ThisWeek.since(now))
    .bind(db_id(user_id)?)
    .fetch_one(&mut *conn)
    .await?;

    let Some(average) = average.filter(|_| total > 0) else { return Ok(None) };

    let favourite: Option<(String, i64)> = sqlx::query_as(
        "SELECT champion, COUNT(*) AS times FROM rolls WHERE user_id = ? AND champion IS NOT NULL GROUP BY champion \
         ORDER BY times DESC, champion ASC LIMIT 1",
    )
    .bind(db_id(user_id)?)
    .fetch_optional(&mut *conn)
    .await?;

    let rank = rank_of(conn, Category::TotalRolls, user_id, now).await?;
    let last = recent(conn, user_id, 1).await?.into_iter().next();

    Ok(Some(UserStats {
        total,
        nat20s,
        nat1s,
        average,
        today,
        this_week,
        favourite,
        rank,
        last,
    }))
}

async fn leaderboard(
    conn: &mut SqliteConnection,
    category: Category,
    limit: usize,
    now: DateTime<Utc>,
) -> Result<Vec<LeaderboardEntry>> {
    let spec = category.spec();
    let query = format!(
        "SELECT scores.user_id, (SELECT latest.username FROM rolls AS latest WHERE latest.user_id = scores.user_id \
         ORDER BY latest.id DESC LIMIT 1) AS username, scores.value, scores.rolls FROM ({}) AS scores ORDER BY \
         scores.value DESC LIMIT ?",
        spec.scores_query()
    );
    let rows: Vec<LeaderboardRow> = sqlx::query_as(&query)
        .bind(spec.window.since(now))
        .bind(spec.min_rolls)
        .bind(i64::try_from(limit)?)
        .fetch_all(&mut *conn)
        .await?;

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| -> Result<LeaderboardEntry> {
            Ok(LeaderboardEntry {
                rank: index + 1,
                user_id: u64::try_from(row.user_id)?,
                username: row.username,
                value: row.value,
                rolls: row.rolls,
            })
        })
        .collect()
}

async fn rank_of(
    conn: &mut SqliteConnection,
    category: Category,
    user_id: u64,
    now: DateTime<Utc>,
) -> Result<Option<usize>> {
    let spec = category.spec();
    let query = format!(
        "WITH scores AS ({}) SELECT (SELECT value FROM scores WHERE user_id = ?), (SELECT COUNT(*) FROM scores WHERE \
         value > (SELECT value FROM scores WHERE user_id = ?))",
        spec.scores_query()
    );
    let user = db_id(user_id)?;
    let (own, ahead): (Option<f64>, i64) = sqlx::query_as(&query)
        .bind(spec.window.since(now))
        .bind(spec.min_rolls)
        .bind(user)
        .bind(user)
        .fetch_one(&mut *conn)
        .await?;

    match own {
        Some(_) => Ok(Some(usize::try_from(ahead)? + 1)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    use super::*;

    fn store() -> (TempDir, RollStore) {
        let dir = TempDir::new().unwrap();
        let store = RollStore::new(dir.path().join("rolls.db"));
        (dir, store)
    }

    /// Friday 2026-10-16, noon UTC
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn roll(user_id: u64, username: &str, value: u8) -> NewRoll<'_> {
        NewRoll {
            user_id,
            username,
            die: D20::new(value).unwrap(),
            role: None,
            champion: None,
        }
    }

    async fn roll_many(store: &RollStore, user_id: u64, username: &str, values: &[u8]) {
        for &value in values {
            store.record(roll(user_id, username, value), now()).await.unwrap();
        }
    }

    #[test]
    fn categories_are_indexed_by_discriminant() {
        for (index, spec) in CATEGORIES.iter().enumerate() {
            assert_eq!(spec.category as usize, index);
            assert!(std::ptr::eq(spec.category.spec(), spec));
        }
    }

    #[test]
    fn windows_start_at_midnight_and_monday() {
        assert_eq!(Window::AllTime.since(now()), "");
        assert_eq!(Window::Today.since(now()), "2026-10-16T00:00:00Z");
        assert_eq!(Window::ThisWeek.since(now()), "2026-10-12T00:00:00Z");

        let monday = Utc.with_ymd_and_hms(2026, 10, 12, 8, 30, 0).unwrap();
        assert_eq!(Window::ThisWeek.since(monday), "2026-10-12T00:00:00Z");
    }

    #[test]
    fn values_are_formatted_per_kind() {
        assert_eq!(ValueFormat::Count.format(12.0), "12");
        assert_eq!(ValueFormat::Percent.format(40.0), "40.0%");
        assert_eq!(ValueFormat::Average.format(10.5), "10.50");
    }

    #[tokio::test]
    async fn no_rolls_means_no_stats() {
        let (_dir, store) = store();
        assert_eq!(store.stats(42, now()).await.unwrap(), None);
        assert_eq!(store.rank_of(Category::TotalRolls, 42, now()).await.unwrap(), None);
        assert!(store.leaderboard(Category::Luckiest, 10, now()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn recorded_rolls_are_read_back() {
        let (_dir, store) = store();
        let first = NewRoll {
            role: Some(Role::Jungle),
            champion: Some("Kha'Zix"),
            ..roll(7, "rengar_main", 17)
        };
        let first_id = store.record(first, now() - Duration::minutes(5)).await.unwrap();
        let second_id = store.record(roll(7, "rengar_main", 3), now()).await.unwrap();
        assert!(second_id > first_id);

        let mut conn = store.connect().await.unwrap();
        let events = recent(&mut conn, 7, 10).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, second_id);
        assert_eq!(events[0].champion, None);
        assert_eq!(events[1], RollEvent {
            id: first_id,
            user_id: 7,
            username: "rengar_main".to_owned(),
            die: D20::new(17).unwrap(),
            role: Some(Role::Jungle),
            champion: Some("Kha'Zix".to_owned()),
            timestamp: now() - Duration::minutes(5),
        });
        assert!(recent(&mut conn, 8, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn stats_aggregate_every_roll_of_the_user() {
        let (_dir, store) = store();
        let times = [
            now() - Duration::hours(1),
            now() - Duration::hours(2),
            Utc.with_ymd_and_hms(2026, 10, 15, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 12, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 11, 23, 59, 59).unwrap(),
        ];
        let rolls = [(20, Some("Kled")), (1, Some("Teemo")), (10, Some("Garen")), (20, Some("Kled")), (4, None)];
        for ((value, champion), at) in rolls.into_iter().zip(times) {
            let new_roll = NewRoll {
                champion,
                ..roll(1, "sett_enjoyer", value)
            };
            store.record(new_roll, at).await.unwrap();
        }
        roll_many(&store, 2, "other", &[5, 6, 7, 8, 9, 10]).await;

        let stats = store.stats(1, now()).await.unwrap().unwrap();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.nat20s, 2);
        assert_eq!(stats.nat1s, 1);
        assert!((stats.average - 11.0).abs() < f64::EPSILON);
        assert!((stats.luck_percent() - 40.0).abs() < f64::EPSILON);
        assert!((stats.unluck_percent() - 20.0).abs() < f64::EPSILON);
        assert_eq!(stats.today, 2);
        assert_eq!(stats.this_week, 4);
        assert_eq!(stats.favourite, Some(("Kled".to_owned(), 2)));
        assert_eq!(stats.rank, Some(2));
        assert_eq!(stats.last.unwrap().die.value(), 4);
    }

    #[tokio::test]
    async fn leaderboard_is_limited_and_ranked_descending() {
        let (_dir, store) = store();
        roll_many(&store, 1, "alice", &[3, 3, 3, 3]).await;
        roll_many(&store, 2, "bob", &[3, 3, 3]).await;
        roll_many(&store, 3, "carol", &[3, 3]).await;
        roll_many(&store, 4, "dave", &[3]).await;

        let entries = store.leaderboard(Category::TotalRolls, 3, now()).await.unwrap();
        assert_eq!(entries.len(), 3);
        let summary: Vec<_> = entries.iter().map(|entry| (entry.rank, entry.username.as_str(), entry.value)).collect();
        assert_eq!(summary, vec![(1, "alice", 4.0), (2, "bob", 3.0), (3, "carol", 2.0)]);

        assert_eq!(store.rank_of(Category::TotalRolls, 4, now()).await.unwrap(), Some(4));
    }

    #[tokio::test]
    async fn ratios_need_a_minimum_sample() {
        let (_dir, store) = store();
        roll_many(&store, 1, "steady", &[20, 20, 1, 10, 12]).await;
        roll_many(&store, 2, "lucky", &[20, 20, 20, 20]).await;

        let luckiest = store.leaderboard(Category::Luckiest, 10, now()).await.unwrap();
        assert_eq!(luckiest.len(), 1);
        assert_eq!(luckiest[0].user_id, 1);
        assert!((luckiest[0].value - 40.0).abs() < 1e-9);

        for category in [Category::Luckiest, Category::Unluckiest, Category::HighestAverage] {
            assert_eq!(store.rank_of(category, 2, now()).await.unwrap(), None);
            assert_eq!(store.rank_of(category, 1, now()).await.unwrap(), Some(1));
        }

        let nat20s = store.leaderboard(Category::Nat20s, 10, now()).await.unwrap();
        assert_eq!(nat20s.iter().map(|entry| entry.user_id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[tokio::test]
    async fn averages_and_unluck_rank_descending() {
        let (_dir, store) = store();
        roll_many(&store, 1, "low", &[1, 1, 2, 2, 4]).await;
        roll_many(&store, 2, "high", &[19, 18, 17, 16, 20]).await;

        let averages = store.leaderboard(Category::HighestAverage, 10, now()).await.unwrap();
        assert_eq!(averages.iter().map(|entry| entry.username.as_str()).collect::<Vec<_>>(), vec!["high", "low"]);
        assert!((averages[0].value - 18.0).abs() < 1e-9);

        let unluckiest = store.leaderboard(Category::Unluckiest, 10, now()).await.unwrap();
        assert_eq!(unluckiest[0].username, "low");
        assert!((unluckiest[0].value - 40.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn windowed_categories_ignore_older_rolls() {
        let (_dir, store) = store();
        let yesterday = now() - Duration::days(1);
        let last_week = now() - Duration::days(7);
        for at in [now(), yesterday, yesterday, last_week, last_week, last_week] {
            store.record(roll(1, "grinder", 10), at).await.unwrap();
        }
        store.record(roll(2, "casual", 10), now()).await.unwrap();
        store.record(roll(2, "casual", 10), now()).await.unwrap();

        let today = store.leaderboard(Category::Today, 10, now()).await.unwrap();
        let today: Vec<_> = today.iter().map(|entry| (entry.user_id, entry.value)).collect();
        assert_eq!(today, vec![(2, 2.0), (1, 1.0)]);

        let week = store.leaderboard(Category::ThisWeek, 10, now()).await.unwrap();
        let week: Vec<_> = week.iter().map(|entry| (entry.user_id, entry.value)).collect();
        assert_eq!(week, vec![(1, 3.0), (2, 2.0)]);

        let total = store.leaderboard(Category::TotalRolls, 10, now()).await.unwrap();
        assert_eq!(total[0].user_id, 1);
        assert!((total[0].value - 6.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn leaderboard_shows_latest_username() {
        let (_dir, store) = store();
        roll_many(&store, 1, "old_name", &[5]).await;
        roll_many(&store, 1, "new_name", &[6]).await;

        let entries = store.leaderboard(Category::TotalRolls, 10, now()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].username, "new_name");
        assert_eq!(entries[0].rolls, 2);
    }

    #[tokio::test]
    async fn init_creates_the_database_file() {
        let (_dir, store) = store();
        assert!(!store.path().exists());
        store.init().await.unwrap();
        assert!(store.path().exists());
    }
}
