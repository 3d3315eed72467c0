//! [`ActorEntity`] implementation for [`Customer`].
//!
//! Creating and replacing both take a full [`CustomerDraft`]: a replace overwrites every
//! field but the id. Drafts are re-validated here so records built in code obey the same
//! rules as records cast from the wire, and `memberNumber` is declared as the unique key.

use async_trait::async_trait;
use record_actor::{ActorEntity, UniqueKey};

use super::CustomerError;
use crate::model::{Customer, CustomerDraft, CustomerId};
use crate::schema::{self, MEMBER_NUMBER};

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerDraft;
    type Update = CustomerDraft;
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, draft: CustomerDraft) -> Result<Self, Self::Error> {
        schema::validate(&draft)?;
        Ok(Customer::new(id, draft))
    }

    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![UniqueKey::new(MEMBER_NUMBER.name, self.member_number.to_string())]
    }

    async fn on_update(&mut self, draft: CustomerDraft, _ctx: &()) -> Result<(), Self::Error> {
        schema::validate(&draft)?;
        self.replace_with(draft);
        Ok(())
    }
}
