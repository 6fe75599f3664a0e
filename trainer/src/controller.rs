use log::{debug, info};
use rand::{RngCore, rngs::StdRng};
use regression::{Dataset, Engine, Initializer, ModelParameters, accuracy, generate};
use serde::Serialize;

use crate::{
    config::TrainingConfig,
    history::{MetricsHistory, TrainingSample},
};

/// High-level lifecycle states of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrainingState {
    /// Nothing started since the last initialization.
    Idle,
    /// Ticks advance the run.
    Running,
    /// The epoch budget was exhausted and the model delivered.
    Completed,
}

/// What a single call to `TrainingController::tick` did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// A batch of steps ran and published a sample, the run goes on.
    Progress(TrainingSample),
    /// The last batch of steps ran and the run completed.
    Finished {
        sample: TrainingSample,
        params: ModelParameters,
    },
    /// Nothing ran, the controller was not running.
    Inactive(TrainingState),
}

/// Owned snapshot of a controller, for readers living elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingView {
    pub state: TrainingState,
    pub epoch: usize,
    pub progress: f64,
    pub params: ModelParameters,
    pub samples: Vec<TrainingSample>,
}

type ModelReady = Box<dyn FnMut(ModelParameters) + Send>;

/// Drives training runs over a fixed dataset.
///
/// The controller is the only writer of the working parameters of a run, every tick
/// replaces them with the output of the engine. Readers get copies.
pub struct TrainingController<R = StdRng>
where
    R: RngCore,
{
    config: TrainingConfig,
    engine: Engine,
    initializer: Initializer,
    rng: R,

    dataset: Dataset,
    params: ModelParameters,
    history: MetricsHistory,
    state: TrainingState,
    epoch: usize,

    on_model_ready: Option<ModelReady>,
}

impl<R: RngCore> TrainingController<R> {
    /// Creates a new `TrainingController` with the default parameter initializer.
    ///
    /// # Arguments
    /// * `config` - The bounds and hyperparameters of every run.
    /// * `rng` - The source of randomness for datasets and initial parameters.
    pub fn new(config: TrainingConfig, rng: R) -> Self {
        Self::with_initializer(config, Initializer::default(), rng)
    }

    /// Creates a new `TrainingController`.
    ///
    /// Generates the dataset and draws the initial parameters right away, the
    /// controller starts `Idle`.
    ///
    /// # Arguments
    /// * `config` - The bounds and hyperparameters of every run.
    /// * `initializer` - Draws the parameters on creation and on every reset.
    /// * `rng` - The source of randomness for datasets and initial parameters.
    pub fn with_initializer(config: TrainingConfig, mut initializer: Initializer, mut rng: R) -> Self {
        let dataset = Dataset::new(generate(&mut rng, config.dataset_size));
        let params = initializer.initialize(&mut rng);

        Self {
            engine: Engine::new(config.learning_rate),
            history: MetricsHistory::new(config.history_len),
            config,
            initializer,
            rng,
            dataset,
            params,
            state: TrainingState::Idle,
            epoch: 0,
            on_model_ready: None,
        }
    }

    /// Registers the consumer of the final parameters, called once per completed run.
    pub fn on_model_ready<F>(&mut self, callback: F)
    where
        F: FnMut(ModelParameters) + Send + 'static,
    {
        self.on_model_ready = Some(Box::new(callback));
    }

    /// Starts a new run from the current parameters.
    ///
    /// # Returns
    /// `false` if a run was already in progress, in which case nothing changes.
    pub fn start(&mut self) -> bool {
        if self.state == TrainingState::Running {
            debug!(epoch = self.epoch; "start requested while running");
            return false;
        }

        self.state = TrainingState::Running;
        self.epoch = 0;

        info!(
            epochs = self.config.epochs.get(),
            steps_per_tick = self.config.steps_per_tick.get(),
            records = self.dataset.len();
            "training started"
        );
        true
    }

    /// Advances the run by one batch of steps and publishes a sample.
    ///
    /// The last batch only performs the steps left in the budget, after it the run is
    /// completed and the final parameters are handed to the model ready consumer.
    pub fn tick(&mut self) -> Tick {
        if self.state != TrainingState::Running {
            return Tick::Inactive(self.state);
        }

        let budget = self.config.epochs.get();
        let steps = self.config.steps_per_tick.get().min(budget - self.epoch);

        let mut loss = f64::NAN;
        for _ in 0..steps {
            let step = self.engine.step(&self.dataset, &self.params);
            self.params = step.params;
            loss = step.loss;
        }

        let sample = TrainingSample {
            epoch: self.epoch + steps - 1,
            loss,
            accuracy: accuracy(&self.dataset, &self.params),
        };

        self.epoch += steps;
        self.history.push(sample);

        debug!(
            epoch = sample.epoch,
            loss = sample.loss,
            accuracy = sample.accuracy;
            "published training sample"
        );

        if self.epoch < budget {
            return Tick::Progress(sample);
        }

        self.complete();
        Tick::Finished {
            sample,
            params: self.params,
        }
    }

    /// Runs ticks until the budget is exhausted, without yielding.
    ///
    /// # Returns
    /// The final parameters.
    pub fn run_to_completion(&mut self) -> ModelParameters {
        self.start();

        loop {
            match self.tick() {
                Tick::Progress(_) => {}
                Tick::Finished { params, .. } => return params,
                Tick::Inactive(_) => return self.params,
            }
        }
    }

    /// Discards the progress of the current run, whatever its state.
    ///
    /// Draws fresh parameters, and a fresh dataset if so configured, and clears the
    /// metrics. Nothing is delivered to the model ready consumer.
    pub fn reset(&mut self) {
        if self.config.regenerate_on_reset {
            self.dataset = Dataset::new(generate(&mut self.rng, self.config.dataset_size));
        }

        self.params = self.initializer.initialize(&mut self.rng);
        self.history.clear();
        self.epoch = 0;

        let previous = self.state;
        self.state = TrainingState::Idle;

        info!(previous:? = previous; "training reset");
    }

    fn complete(&mut self) {
        self.state = TrainingState::Completed;

        info!(
            epochs = self.epoch,
            w_sqft = self.params.w_sqft,
            w_beds = self.params.w_beds,
            w_baths = self.params.w_baths,
            bias = self.params.bias;
            "training completed"
        );

        if let Some(callback) = self.on_model_ready.as_mut() {
            callback(self.params);
        }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn state(&self) -> TrainingState {
        self.state
    }

    /// Steps performed in the current run.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Fraction of the epoch budget performed in the current run.
    pub fn progress(&self) -> f64 {
        self.epoch as f64 / self.config.epochs.get() as f64
    }

    /// Snapshot of the working parameters.
    pub fn params(&self) -> ModelParameters {
        self.params
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn history(&self) -> &MetricsHistory {
        &self.history
    }

    /// Snapshot of the metrics window, oldest first.
    pub fn samples(&self) -> Vec<TrainingSample> {
        self.history.to_vec()
    }

    pub fn view(&self) -> TrainingView {
        TrainingView {
            state: self.state,
            epoch: self.epoch,
            progress: self.progress(),
            params: self.params,
            samples: self.samples(),
        }
    }
}
