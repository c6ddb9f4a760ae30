use creational_core::{
    CreationalError, DeviceKind, DriverOutcome, ShowcaseConfig,
    application::Showcase,
    factories::RestHttpAdapterFactory,
    ports::EventPublisher,
    repositories::InMemoryEventLog,
    services::Director,
    telemetry,
};

const HISTORY_LIMIT: usize = 256;

fn main() -> Result<(), CreationalError> {
    let config = ShowcaseConfig::default();
    telemetry::init(&config.telemetry);

    let showcase = Showcase::new(config, InMemoryEventLog::with_capacity_limit(HISTORY_LIMIT));
    tracing::debug!(
        mobile = %showcase.config().mobile.series,
        laptop = %showcase.config().laptop.series,
        "showcase configured"
    );

    for kind in DeviceKind::ALL {
        if let DriverOutcome::Completed(report) = showcase.run_abstract_factory_for(kind)? {
            tracing::info!(%kind, cpu = %report.cpu, memory = %report.memory, display = %report.display, "device assembled");
        }
    }

    showcase.run_factory_method(Some(&RestHttpAdapterFactory))?;

    let mut director = Director::new();
    if let DriverOutcome::Completed(run) = showcase.run_prototype(Some(&mut director))? {
        for car in &run.cars {
            tracing::info!(car = %car.id(), brand = %car.brand(), attributes = %car.attributes(), "produced");
        }
    }

    let events = showcase.event_publisher().get_event_history(None)?;
    tracing::info!(events = events.len(), "showcase finished");

    Ok(())
}
