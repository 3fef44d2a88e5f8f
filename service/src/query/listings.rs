//! [`Query`] collection related to multiple [`Listing`]s.

use std::collections::BTreeSet;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{database, Database},
    read::listing::list::Filter,
    Service,
};

use super::{DatabaseQuery, Query};

/// Queries all the [`Listing`]s in their insertion order.
pub type All = DatabaseQuery<By<Vec<Listing>, ()>>;

/// Queries all the distinct [`listing::City`]s in ascending order.
pub type Cities = DatabaseQuery<By<BTreeSet<listing::City>, ()>>;

/// Queries the [`Listing`]s passing the provided [`Filter`], in the order
/// it defines.
#[derive(Clone, Debug, Default)]
pub struct List(pub Filter);

impl<Db, St> Query<List> for Service<Db, St>
where
    Db: Database<
        Select<By<Vec<Listing>, ()>>,
        Ok = Vec<Listing>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        List(filter): List,
    ) -> Result<Self::Ok, Self::Err> {
        let all = self
            .database()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;
        Ok(filter.apply(&all))
    }
}
