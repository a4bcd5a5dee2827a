use crate::constants::{FREE_EXERCISE_DB_API, FREE_EXERCISE_DB_URL};
use crate::error::{PrepError, Result};
use crate::types::{ExerciseSource, RawExercise};
use tracing::{info, instrument};

pub struct FreeExerciseDb {
    client: reqwest::Client,
    url: String,
}

impl Default for FreeExerciseDb {
    fn default() -> Self {
        Self::new()
    }
}

impl FreeExerciseDb {
    pub fn new() -> Self {
        Self::with_url(FREE_EXERCISE_DB_URL)
    }

    /// Points the source at a different endpoint. Tests use this to fetch
    /// from a local mock server.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl ExerciseSource for FreeExerciseDb {
    fn source_name(&self) -> &'static str {
        FREE_EXERCISE_DB_API
    }

    #[instrument(skip(self))]
    async fn fetch_exercises(&self) -> Result<Vec<RawExercise>> {
        info!("Fetching exercise dump from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(PrepError::Api {
                message: format!("exercise dump request returned {}", response.status()),
            });
        }

        let exercises: Vec<RawExercise> = response.json().await?;
        info!(
            "Successfully fetched {} raw records from the Free Exercise DB",
            exercises.len()
        );
        Ok(exercises)
    }
}
