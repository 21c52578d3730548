use alarm_notifier::{HandlerResponse, Notifier, SnsEnvelope};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use slack_webhook::SlackClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    alarm_notifier::init_tracing();

    // One client per process so warm invocations reuse its connection pool.
    let notifier = Notifier::new(SlackClient::new()?);
    let notifier = &notifier;

    info!(version = alarm_notifier::version(), "Starting alarm notifier");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<SnsEnvelope>| async move {
        let (envelope, context) = event.into_parts();
        info!(
            request_id = %context.request_id,
            records = envelope.records.len(),
            "Received SNS event"
        );
        Ok::<HandlerResponse, Error>(notifier.handle(&envelope).await)
    }))
    .await
}
