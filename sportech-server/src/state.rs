//! Application state: one service per catalog collection

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{
    FixtureRepo, LeagueRepo, ManagerRepo, PersonRepo, PlayerRepo, ReadRepo, StadiumRepo, TeamRepo,
};
use crate::models::{
    League, Manager, ManagerSlot, Person, Player, PlayerSlot, Resource, Stadium, Team,
};
use crate::services::{CatalogService, CompositionService, Logged, PassthroughService};

/// Shared application state
///
/// Every service is wrapped in `Logged`, so each call is recorded once
/// regardless of which transport drives it.
#[derive(Clone)]
pub struct AppState {
    pub leagues: Arc<dyn CatalogService<League>>,
    pub teams: Arc<dyn CatalogService<Team>>,
    pub stadiums: Arc<dyn CatalogService<Stadium>>,
    pub players: Arc<dyn CatalogService<Player>>,
    pub managers: Arc<dyn CatalogService<Manager>>,
}

/// Accessors the services are built from
pub struct Accessors {
    pub leagues: Arc<dyn ReadRepo<League>>,
    pub teams: Arc<dyn ReadRepo<Team>>,
    pub stadiums: Arc<dyn ReadRepo<Stadium>>,
    pub persons: Arc<dyn ReadRepo<Person>>,
    pub players: Arc<dyn ReadRepo<PlayerSlot>>,
    pub managers: Arc<dyn ReadRepo<ManagerSlot>>,
}

impl Accessors {
    /// Postgres accessors for every entity
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            leagues: Arc::new(LeagueRepo::new(pool.clone())),
            teams: Arc::new(TeamRepo::new(pool.clone())),
            stadiums: Arc::new(StadiumRepo::new(pool.clone())),
            persons: Arc::new(PersonRepo::new(pool.clone())),
            players: Arc::new(PlayerRepo::new(pool.clone())),
            managers: Arc::new(ManagerRepo::new(pool)),
        }
    }

    /// Serve teams from seed data instead of the database
    pub fn with_team_fixtures(mut self, teams: FixtureRepo<Team>) -> Self {
        self.teams = Arc::new(teams);
        self
    }
}

fn logged<T, S>(service: S) -> Arc<dyn CatalogService<T>>
where
    T: Resource + Send + 'static,
    S: CatalogService<T> + 'static,
{
    Arc::new(Logged::new(service, T::PLURAL))
}

impl AppState {
    pub fn new(accessors: Accessors) -> Self {
        let Accessors {
            leagues,
            teams,
            stadiums,
            persons,
            players,
            managers,
        } = accessors;

        Self {
            leagues: logged(PassthroughService::new(leagues)),
            teams: logged(PassthroughService::new(teams)),
            stadiums: logged(PassthroughService::new(stadiums)),
            players: logged(CompositionService::<Player>::new(players, persons.clone())),
            managers: logged(CompositionService::<Manager>::new(managers, persons)),
        }
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Accessors::postgres(pool))
    }
}
