//! In-memory [`Database`] implementation.

use std::{collections::BTreeSet, mem, sync::Arc};

use common::operations::{By, Commit, Insert, Select, Transact};
use tokio::sync::{Mutex, OwnedRwLockWriteGuard, RwLock};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{database, Database},
    read,
};

/// In-memory [`Database`] keeping [`Listing`]s in their insertion order.
///
/// All the data is lost once the last clone of this [`Memory`] is dropped.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Stored [`Listing`]s.
    listings: Arc<RwLock<Vec<Listing>>>,
}

impl Database<Select<By<Option<Listing>, listing::Id>>> for Memory {
    type Ok = Option<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.listings.read().await.iter().find(|l| l.id == id).cloned())
    }
}

impl Database<Select<By<Vec<Listing>, ()>>> for Memory {
    type Ok = Vec<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Listing>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.listings.read().await.clone())
    }
}

impl Database<Select<By<BTreeSet<listing::City>, ()>>> for Memory {
    type Ok = BTreeSet<listing::City>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<BTreeSet<listing::City>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.listings.read().await.iter().map(Listing::city).collect())
    }
}

impl Database<Transact> for Memory {
    type Ok = Tx;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        let listings = Arc::clone(&self.listings).write_owned().await;
        Ok(Tx {
            inner: Mutex::new(TxInner {
                listings,
                staged: Vec::new(),
            }),
        })
    }
}

/// Transaction over a [`Memory`] database.
///
/// Holds the write lock of the [`Memory`] database while alive, so
/// transactions are serialized and reads wait for them to finish. Inserted
/// [`Listing`]s become visible on [`Commit`] only, and are discarded if the
/// [`Tx`] is dropped without it.
#[derive(Debug)]
pub struct Tx {
    /// Inner state of this [`Tx`].
    inner: Mutex<TxInner>,
}

/// Inner state of a [`Tx`].
#[derive(Debug)]
struct TxInner {
    /// Write-locked [`Listing`]s of the [`Memory`] database.
    listings: OwnedRwLockWriteGuard<Vec<Listing>>,

    /// [`Listing`]s inserted, but not committed yet.
    staged: Vec<Listing>,
}

impl TxInner {
    /// Returns IDs of all the [`Listing`]s visible in this transaction.
    fn ids(&self) -> impl Iterator<Item = listing::Id> + '_ {
        self.listings.iter().chain(&self.staged).map(|l| l.id)
    }
}

impl Database<Select<By<listing::Id, read::listing::Next>>> for Tx {
    type Ok = listing::Id;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<listing::Id, read::listing::Next>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .inner
            .lock()
            .await
            .ids()
            .max()
            .map_or(listing::Id::FIRST, listing::Id::next))
    }
}

impl Database<Insert<Listing>> for Tx {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(listing): Insert<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut inner = self.inner.lock().await;
        if inner.ids().any(|id| id == listing.id) {
            return Err(tracerr::new!(database::Error::ListingExists(
                listing.id
            )));
        }
        inner.staged.push(listing);
        Ok(())
    }
}

impl Database<Commit> for Tx {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        let mut inner = self.inner.lock().await;
        let staged = mem::take(&mut inner.staged);
        inner.listings.extend(staged);
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use std::collections::BTreeSet;

    use common::operations::{By, Commit, Insert, Select, Transact};

    use crate::{
        domain::{
            listing::{self, Description, Location, Price, Title},
            Listing,
        },
        infra::{database, Database as _},
        read,
    };

    use super::Memory;

    fn listing(id: listing::Id, location: &str, price: u64) -> Listing {
        Listing {
            id,
            title: Title::new("House").unwrap(),
            location: Location::new(location).unwrap(),
            price: Price::from(price),
            price_display: Price::from(price).into(),
            description: Description::default(),
            images: vec![],
        }
    }

    async fn add(db: &Memory, location: &str, price: u64) -> listing::Id {
        let tx = db.execute(Transact).await.unwrap();
        let id = tx
            .execute(Select(By::new(read::listing::Next)))
            .await
            .unwrap();
        tx.execute(Insert(listing(id, location, price)))
            .await
            .unwrap();
        tx.execute(Commit).await.unwrap();
        id
    }

    async fn all(db: &Memory) -> Vec<Listing> {
        db.execute(Select(By::<Vec<Listing>, ()>::new(())))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn assigns_increasing_ids_starting_from_one() {
        let db = Memory::default();

        let ids = [
            add(&db, "Kampala, Uganda", 250).await,
            add(&db, "Entebbe, Uganda", 80).await,
            add(&db, "Jinja, Uganda", 400).await,
        ];

        assert_eq!(ids.map(u64::from), [1, 2, 3]);
        assert_eq!(
            all(&db).await.iter().map(|l| l.id).collect::<Vec<_>>(),
            ids,
        );
    }

    #[tokio::test]
    async fn selects_by_id() {
        let db = Memory::default();
        let id = add(&db, "Kampala, Uganda", 250).await;

        let found = db
            .execute(Select(By::<Option<Listing>, _>::new(id)))
            .await
            .unwrap();
        assert_eq!(found.map(|l| l.id), Some(id));

        let missing = db
            .execute(Select(By::<Option<Listing>, _>::new(id.next())))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn selects_distinct_sorted_cities() {
        let db = Memory::default();
        _ = add(&db, "Kampala, Uganda", 250).await;
        _ = add(&db, "Entebbe, Uganda", 80).await;
        _ = add(&db, "Kampala, Uganda", 300).await;
        _ = add(&db, "Jinja", 400).await;

        let cities = db
            .execute(Select(By::<BTreeSet<listing::City>, _>::new(())))
            .await
            .unwrap();

        assert_eq!(
            cities.iter().map(ToString::to_string).collect::<Vec<_>>(),
            ["Entebbe", "Jinja", "Kampala"],
        );
    }

    #[tokio::test]
    async fn discards_uncommitted_inserts() {
        let db = Memory::default();
        {
            let tx = db.execute(Transact).await.unwrap();
            tx.execute(Insert(listing(listing::Id::FIRST, "Jinja", 1)))
                .await
                .unwrap();
        }

        assert!(all(&db).await.is_empty());
        assert_eq!(add(&db, "Jinja", 1).await, listing::Id::FIRST);
    }

    #[tokio::test]
    async fn rejects_duplicate_ids() {
        let db = Memory::default();
        let id = add(&db, "Jinja", 1).await;

        let tx = db.execute(Transact).await.unwrap();
        let err = tx
            .execute(Insert(listing(id, "Jinja", 2)))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            database::Error::ListingExists(dup) if *dup == id,
        ));
    }

    #[tokio::test]
    async fn serializes_concurrent_transactions() {
        let db = Memory::default();

        let tasks = (0..10)
            .map(|i| {
                let db = db.clone();
                tokio::spawn(async move { add(&db, "Kampala, Uganda", i).await })
            })
            .collect::<Vec<_>>();
        let mut ids = Vec::new();
        for t in tasks {
            ids.push(u64::from(t.await.unwrap()));
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }
}
