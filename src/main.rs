use anyhow::Context;
use log::{debug, info, warn};
use prophet_estate::{
    AppConfig, PricingReport,
    analysis::{Disconnected, RemoteAnalyst, format_price},
    analyze_with_fallback,
};
use regression::predict_price;
use tokio::{
    signal,
    sync::{mpsc, watch},
};
use tokio_util::sync::CancellationToken;
use trainer::{DriveOutcome, TrainingController, TrainingEvent, drive};

const EVENTS_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().context("failed to load the configuration")?;
    let rng = config.training.rng();
    let mut controller = TrainingController::new(config.training.clone(), rng);

    let (model_tx, model_rx) = watch::channel(None);
    controller.on_model_ready(move |params| {
        model_tx.send_replace(Some(params));
    });

    let (events_tx, mut events_rx) = mpsc::channel(EVENTS_CAPACITY);
    let reporter = tokio::spawn(async move {
        let mut last = None;
        while let Some(event) = events_rx.recv().await {
            match event {
                TrainingEvent::Sample(sample) => {
                    debug!(epoch = sample.epoch, loss = sample.loss, accuracy = sample.accuracy; "sample");
                    last = Some(sample);
                }
                TrainingEvent::Finished(params) => info!(params:? = params; "model ready"),
                TrainingEvent::Cancelled { epoch } => info!(epoch = epoch; "run interrupted"),
            }
        }
        last
    });

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("received SIGINT, stopping at the next tick");
            interrupt.cancel();
        }
    });

    let outcome = drive(&mut controller, &cancel, &events_tx).await;
    drop(events_tx);
    let final_sample = reporter.await.context("the metrics reporter panicked")?;

    if let DriveOutcome::Cancelled { epoch } = outcome {
        controller.reset();
        warn!(epoch = epoch; "training cancelled, no model was produced");
        return Ok(());
    }

    let params = (*model_rx.borrow())
        .context("the run finished without delivering its parameters")?;
    let input = config.prediction;
    let predicted_price = predict_price(&input, &params);
    info!(price = format_price(predicted_price).as_str(); "property priced");

    let analyst = RemoteAnalyst::from_env(Disconnected, config.api_key_var.as_str());
    let analysis = analyze_with_fallback(&analyst, &input, predicted_price).await;

    let report = PricingReport {
        params,
        input,
        predicted_price,
        final_sample,
        analysis,
    };
    println!("{}", report.to_json()?);

    Ok(())
}
