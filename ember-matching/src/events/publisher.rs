use uuid::Uuid;

use ember_shared::clients::rabbitmq::RabbitMQClient;
use ember_shared::types::event::{payloads, routing_keys, Event};

pub async fn publish_like_sent(rabbitmq: &RabbitMQClient, from_user_id: Uuid, to_user_id: Uuid) {
    let event = Event::new(
        "ember-matching",
        routing_keys::MATCHING_LIKE_SENT,
        payloads::LikeSent {
            from_user_id,
            to_user_id,
        },
    )
    .with_user(from_user_id);

    if let Err(e) = rabbitmq.publish(routing_keys::MATCHING_LIKE_SENT, &event).await {
        tracing::error!(error = %e, "failed to publish like.sent event");
    }
}

pub async fn publish_match_created(
    rabbitmq: &RabbitMQClient,
    match_id: Uuid,
    user1_id: Uuid,
    user2_id: Uuid,
) {
    let event = Event::new(
        "ember-matching",
        routing_keys::MATCHING_MATCH_CREATED,
        payloads::MatchCreated {
            match_id,
            user1_id,
            user2_id,
        },
    );

    if let Err(e) = rabbitmq
        .publish(routing_keys::MATCHING_MATCH_CREATED, &event)
        .await
    {
        tracing::error!(error = %e, "failed to publish match.created event");
    }
}
