//! In-memory repositories for service unit tests

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use celeb_common::AnalyticsConfig;
use celeb_core::entities::collect_aspects;
use celeb_core::{
    AliasList, AliasRepository, AnalyticsRepository, Celebrity, CelebrityAlias,
    CelebrityRepository, CelebrityUpdate, DashboardQuery, DateWindow, DomainError, EntityId,
    Interaction, InteractionRepository, NewCelebrity, RepoResult, SentimentTotals, StatsSummary,
    TopCelebrity, TopReactionCelebrity, TopicFilter,
};
use chrono::{NaiveDate, Utc};
use sqlx::postgres::PgPoolOptions;

use super::context::{ServiceContext, ServiceContextBuilder};

/// "Today" for every service test
pub fn today() -> NaiveDate {
    date(2024, 6, 15)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[derive(Default)]
struct Tables {
    celebrities: Vec<Celebrity>,
    aliases: Vec<CelebrityAlias>,
    interactions: Vec<Interaction>,
    reactions: Vec<(EntityId, NaiveDate, i64)>,
}

/// Shared in-memory store implementing every repository trait
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    next_id: AtomicI64,
}

/// Handle tests use to seed data
#[derive(Clone, Default)]
pub struct Fixture(Arc<InMemoryStore>);

impl Fixture {
    fn next_id(&self) -> EntityId {
        EntityId::new(self.0.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn add_celebrity(&self, name: &str, is_celebrity: bool) -> EntityId {
        let id = self.next_id();
        self.0.tables.lock().unwrap().celebrities.push(Celebrity {
            id,
            name: name.to_string(),
            image_url: None,
            is_celebrity,
            created_at: Utc::now(),
        });
        id
    }

    pub fn add_alias(&self, celebrity_id: EntityId, alias: &str) -> EntityId {
        let id = self.next_id();
        self.0.tables.lock().unwrap().aliases.push(CelebrityAlias {
            id,
            celebrity_id,
            alias: alias.to_string(),
            created_at: Utc::now(),
        });
        id
    }

    pub fn add_interaction(
        &self,
        celebrity_id: EntityId,
        day: NaiveDate,
        (positive, negative, neutral): (i32, i32, i32),
        field: Option<&str>,
    ) {
        let id = self.next_id();
        let mut tables = self.0.tables.lock().unwrap();
        let celebrity = tables
            .celebrities
            .iter()
            .find(|c| c.id == celebrity_id)
            .cloned()
            .unwrap();
        tables.interactions.push(Interaction {
            id,
            celebrity_id,
            celebrity_name: celebrity.name,
            is_celebrity: celebrity.is_celebrity,
            positive_count: positive,
            negative_count: negative,
            neutral_count: neutral,
            field: field.map(String::from),
            interaction_date: day,
            created_at: Utc::now(),
        });
    }

    pub fn add_reaction(&self, celebrity_id: EntityId, day: NaiveDate, total: i64) {
        self.0
            .tables
            .lock()
            .unwrap()
            .reactions
            .push((celebrity_id, day, total));
    }
}

/// Context over the fixture with default analytics settings
pub fn test_context(fixture: &Fixture) -> ServiceContext {
    test_context_with(fixture, AnalyticsConfig::default())
}

/// Context over the fixture with custom analytics settings
///
/// The pool is lazy and never connects; must be called inside a runtime.
pub fn test_context_with(fixture: &Fixture, analytics: AnalyticsConfig) -> ServiceContext {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unused")
        .unwrap();
    let store = fixture.0.clone();

    ServiceContextBuilder::new()
        .pool(pool)
        .celebrity_repo(store.clone())
        .alias_repo(store.clone())
        .interaction_repo(store.clone())
        .analytics_repo(store)
        .analytics(analytics)
        .fixed_today(today())
        .build()
        .unwrap()
}

impl Tables {
    fn celebrity(&self, id: EntityId) -> Option<&Celebrity> {
        self.celebrities.iter().find(|c| c.id == id)
    }

    /// Mirrors the SQL ranking: published, in window, topic match, sum > 0
    fn ranked(&self, query: &DashboardQuery) -> Vec<TopCelebrity> {
        let mut ranked: Vec<TopCelebrity> = self
            .celebrities
            .iter()
            .filter(|c| c.is_celebrity)
            .filter_map(|c| {
                let rows: Vec<&Interaction> = self
                    .interactions
                    .iter()
                    .filter(|i| i.celebrity_id == c.id && query.window.contains(i.interaction_date))
                    .filter(|i| match query.topic.as_topic() {
                        Some(topic) => i.field.as_deref() == Some(topic),
                        None => true,
                    })
                    .collect();

                let totals = rows
                    .iter()
                    .map(|i| {
                        SentimentTotals::new(
                            i64::from(i.positive_count),
                            i64::from(i.negative_count),
                            i64::from(i.neutral_count),
                        )
                    })
                    .sum::<SentimentTotals>();
                if totals.total() == 0 {
                    return None;
                }

                let mut aliases: Vec<&CelebrityAlias> =
                    self.aliases.iter().filter(|a| a.celebrity_id == c.id).collect();
                aliases.sort_by_key(|a| a.id);

                Some(TopCelebrity {
                    celebrity_id: c.id,
                    celebrity_name: c.name.clone(),
                    image_url: c.image_url.clone(),
                    is_celebrity: c.is_celebrity,
                    aliases: AliasList::from_aliases(aliases.iter().map(|a| a.alias.as_str())),
                    totals,
                    main_aspects: collect_aspects(rows.iter().map(|i| i.field.as_deref())),
                    total_reactions: self.reactions_for(c.id, query.window),
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            query
                .sentiment
                .rank_value(&b.totals)
                .cmp(&query.sentiment.rank_value(&a.totals))
                .then(a.celebrity_id.cmp(&b.celebrity_id))
        });
        ranked
    }

    fn reactions_for(&self, id: EntityId, window: DateWindow) -> i64 {
        self.reactions
            .iter()
            .filter(|(c, day, _)| *c == id && window.contains(*day))
            .map(|(_, _, total)| total)
            .sum()
    }
}

#[async_trait]
impl CelebrityRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Celebrity>> {
        let mut all = self.tables.lock().unwrap().celebrities.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Celebrity>> {
        Ok(self.tables.lock().unwrap().celebrity(id).cloned())
    }

    async fn create(&self, celebrity: &NewCelebrity) -> RepoResult<Celebrity> {
        let id = EntityId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let created = Celebrity {
            id,
            name: celebrity.name.clone(),
            image_url: celebrity.image_url.clone(),
            is_celebrity: celebrity.is_celebrity,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().celebrities.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: EntityId, update: &CelebrityUpdate) -> RepoResult<Option<Celebrity>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.celebrities.iter_mut().find(|c| c.id == id).map(|c| {
            c.name.clone_from(&update.name);
            c.image_url.clone_from(&update.image_url);
            if let Some(flag) = update.is_celebrity {
                c.is_celebrity = flag;
            }
            c.clone()
        }))
    }

    async fn set_is_celebrity(&self, id: EntityId, is_celebrity: bool) -> RepoResult<Option<Celebrity>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.celebrities.iter_mut().find(|c| c.id == id).map(|c| {
            c.is_celebrity = is_celebrity;
            c.clone()
        }))
    }
}

#[async_trait]
impl AliasRepository for InMemoryStore {
    async fn find_by_celebrity(&self, celebrity_id: EntityId) -> RepoResult<Vec<CelebrityAlias>> {
        let mut aliases: Vec<_> = self
            .tables
            .lock()
            .unwrap()
            .aliases
            .iter()
            .filter(|a| a.celebrity_id == celebrity_id)
            .cloned()
            .collect();
        aliases.sort_by(|a, b| a.alias.cmp(&b.alias).then(a.id.cmp(&b.id)));
        Ok(aliases)
    }

    async fn create(&self, celebrity_id: EntityId, alias: &str) -> RepoResult<CelebrityAlias> {
        let mut tables = self.tables.lock().unwrap();
        if tables.celebrity(celebrity_id).is_none() {
            return Err(DomainError::CelebrityNotFound(celebrity_id));
        }
        let created = CelebrityAlias {
            id: EntityId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            celebrity_id,
            alias: alias.trim().to_string(),
            created_at: Utc::now(),
        };
        tables.aliases.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: EntityId) -> RepoResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.aliases.len();
        tables.aliases.retain(|a| a.id != id);
        Ok(tables.aliases.len() < before)
    }
}

#[async_trait]
impl InteractionRepository for InMemoryStore {
    async fn find_in_window(
        &self,
        window: DateWindow,
        topic: &TopicFilter,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Interaction>> {
        let mut rows: Vec<_> = self
            .tables
            .lock()
            .unwrap()
            .interactions
            .iter()
            .filter(|i| i.is_celebrity && window.contains(i.interaction_date))
            .filter(|i| topic.as_topic().map_or(true, |t| i.field.as_deref() == Some(t)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.interaction_date
                .cmp(&a.interaction_date)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        if let Some(limit) = limit {
            rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(rows)
    }
}

#[async_trait]
impl AnalyticsRepository for InMemoryStore {
    async fn top_celebrities(&self, query: &DashboardQuery) -> RepoResult<Vec<TopCelebrity>> {
        Ok(self.tables.lock().unwrap().ranked(query))
    }

    async fn ranked_candidate_ids(
        &self,
        query: &DashboardQuery,
        cap: Option<i64>,
    ) -> RepoResult<Vec<EntityId>> {
        let ranked = self.tables.lock().unwrap().ranked(query);
        let cap = cap.map_or(usize::MAX, |c| usize::try_from(c).unwrap_or(usize::MAX));
        Ok(ranked.into_iter().take(cap).map(|c| c.celebrity_id).collect())
    }

    async fn top_reactions_among(
        &self,
        window: DateWindow,
        candidates: &[EntityId],
        limit: i64,
    ) -> RepoResult<Vec<TopReactionCelebrity>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<_> = candidates
            .iter()
            .filter_map(|id| tables.celebrity(*id))
            .map(|c| TopReactionCelebrity {
                celebrity_id: c.id,
                celebrity_name: c.name.clone(),
                image_url: c.image_url.clone(),
                total_reactions: tables.reactions_for(c.id, window),
            })
            .filter(|r| r.total_reactions > 0)
            .collect();
        rows.sort_by(|a, b| {
            b.total_reactions
                .cmp(&a.total_reactions)
                .then(a.celebrity_id.cmp(&b.celebrity_id))
        });
        rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(rows)
    }

    async fn stats(&self, window: DateWindow, topic: &TopicFilter) -> RepoResult<StatsSummary> {
        let query = DashboardQuery::new(window).with_topic(topic.clone());
        Ok(StatsSummary::from_ranked(&self.tables.lock().unwrap().ranked(&query)))
    }
}
