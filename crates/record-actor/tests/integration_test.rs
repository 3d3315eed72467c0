use async_trait::async_trait;
use record_actor::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient, UniqueKey};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Seat {
    id: u32,
    guest: String,
    number: u32,
}

#[derive(Debug)]
struct SeatCreate {
    guest: String,
    number: u32,
}

#[derive(Debug)]
struct SeatUpdate {
    guest: Option<String>,
    number: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
enum SeatError {
    #[error("seat {0} does not exist")]
    NoSuchSeat(u32),
    #[error("{0}")]
    Other(String),
}

impl From<String> for SeatError {
    fn from(msg: String) -> Self {
        SeatError::Other(msg)
    }
}

const ROWS: u32 = 50;

#[async_trait]
impl ActorEntity for Seat {
    type Id = u32;
    type Create = SeatCreate;
    type Update = SeatUpdate;
    type Context = ();
    type Error = SeatError;

    fn from_create_params(id: u32, params: SeatCreate) -> Result<Self, Self::Error> {
        if params.number > ROWS {
            return Err(SeatError::NoSuchSeat(params.number));
        }
        Ok(Self {
            id,
            guest: params.guest,
            number: params.number,
        })
    }

    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![UniqueKey::new("number", self.number.to_string())]
    }

    async fn on_update(&mut self, update: SeatUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(guest) = update.guest {
            self.guest = guest;
        }
        if let Some(number) = update.number {
            if number > ROWS {
                return Err(SeatError::NoSuchSeat(number));
            }
            self.number = number;
        }
        Ok(())
    }
}

struct SeatClient {
    inner: ResourceClient<Seat>,
}

#[async_trait]
impl ActorClient<Seat> for SeatClient {
    type Error = SeatError;

    fn inner(&self) -> &ResourceClient<Seat> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SeatError::Other(e.to_string())
    }
}

fn seat(guest: &str, number: u32) -> SeatCreate {
    SeatCreate {
        guest: guest.to_string(),
        number,
    }
}

#[tokio::test]
async fn test_record_lifecycle() {
    let (actor, client) = ResourceActor::<Seat>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let created = client.create(seat("Alice", 12)).await.unwrap();
    assert_eq!(created.id, 1);

    // 2. Entity validation error travels back boxed
    let invalid = client.create(seat("Bob", 99)).await;
    match invalid {
        Err(FrameworkError::EntityError(e)) => {
            assert_eq!(e.to_string(), "seat 99 does not exist");
        }
        other => panic!("expected entity error, got {:?}", other.map(|s| s.id)),
    }

    // 3. Update
    let moved = client
        .update(
            created.id,
            SeatUpdate {
                guest: Some("Alice B.".into()),
                number: Some(14),
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.guest, "Alice B.");
    assert_eq!(moved.number, 14);

    // 4. Update of an unknown id
    let missing = client
        .update(
            42,
            SeatUpdate {
                guest: None,
                number: None,
            },
        )
        .await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "42"));

    // 5. Read through the ActorClient defaults
    let seats = SeatClient {
        inner: client.clone(),
    };
    assert_eq!(seats.list().await.unwrap(), vec![moved.clone()]);
    assert_eq!(seats.get(created.id).await.unwrap(), Some(moved));

    // 6. Delete
    seats.delete(created.id).await.unwrap();
    assert!(client.get(created.id).await.unwrap().is_none());
    assert!(matches!(
        client.delete(created.id).await,
        Err(FrameworkError::NotFound(_))
    ));

    // 7. Shutdown once every client is gone
    drop(seats);
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_respect_unique_key() {
    let (actor, client) = ResourceActor::<Seat>::new(32);
    tokio::spawn(actor.run(()));

    let mut handles = vec![];
    for i in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(seat(&format!("guest {i}"), 7)).await
        }));
    }

    let mut accepted = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(FrameworkError::Conflict { field, value }) => {
                assert_eq!((field, value.as_str()), ("number", "7"));
                conflicts += 1;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(accepted, 1, "exactly one guest gets seat 7");
    assert_eq!(conflicts, 9);
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<Seat>::new(1);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
