use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

pub type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

/// A log record as the pipeline emitted it: its level and every field
/// rendered to text. `%`-formatted fields come out bare, plain `&str` fields
/// keep their Debug quotes.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    fields: Vec<(&'static str, String)>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find_map(|(key, value)| (*key == name).then_some(value.as_str()))
    }
}

/// Every event logged by this test binary so far. The first call installs the
/// global subscriber. Tests share the log and run in parallel, so look events
/// up by a value unique to the test.
pub fn captured_events() -> EventLog {
    static LOG: OnceLock<EventLog> = OnceLock::new();

    LOG.get_or_init(|| {
        let log = EventLog::default();
        let subscriber = tracing_subscriber::registry().with(Recorder(log.clone()));
        tracing::subscriber::set_global_default(subscriber)
            .expect("another tracing subscriber is already installed");
        log
    })
    .clone()
}

struct Recorder(EventLog);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);

        self.0.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }
}

#[derive(Default)]
struct Fields(Vec<(&'static str, String)>);

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name(), format!("{value:?}")));
    }
}
