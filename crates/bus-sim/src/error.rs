use bus_core::{CoreError, Tick};
use bus_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("route configuration error: {0}")]
    Route(#[from] RouteError),

    #[error("publishing report {tick} failed: {source}")]
    Publish {
        tick:   Tick,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type SimResult<T> = Result<T, SimError>;
