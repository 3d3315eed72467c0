mod common;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use common::{CountingApi, ScriptedPrompt};
use customer_records::frontend::{
    CustomerApi, CustomerForm, CustomerManagement, ManagementError, Outcome, TransportError,
};
use customer_records::model::{Customer, CustomerDraft, CustomerId, CustomerPayload};
use customer_records::schema;

struct Screen {
    management: CustomerManagement,
    api: Arc<CountingApi>,
    prompt: Arc<ScriptedPrompt>,
}

async fn mounted_screen(answers: &[bool]) -> Screen {
    let base = common::spawn_server().await;
    let api = CountingApi::new(&base);
    let prompt = ScriptedPrompt::answering(answers);
    let management = CustomerManagement::new(api.clone(), prompt.clone());
    management.mount().await.unwrap();
    api.clear();
    Screen {
        management,
        api,
        prompt,
    }
}

fn fill(management: &mut CustomerManagement, name: &str, dob: &str, member_number: &str) {
    let form = management.form_mut();
    form.name = name.into();
    form.dob = dob.into();
    form.member_number = member_number.into();
}

#[tokio::test]
async fn test_create_refetches_the_list() {
    let Screen {
        mut management,
        api,
        prompt,
    } = mounted_screen(&[]).await;
    let mut updates = management.subscribe();

    fill(&mut management, "Alice", "1990-05-01", "1001");
    management.form_mut().interests = "chess".into();

    assert_eq!(management.submit().await.unwrap(), Outcome::Completed);
    assert_eq!(prompt.alerts(), vec!["Customer added successfully"]);
    assert_eq!(api.calls(), vec!["POST /customer", "GET /customer"]);
    assert_eq!(management.form(), &CustomerForm::default());

    let customers = management.customers();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].name, "Alice");
    assert_eq!(customers[0].member_number, 1001);

    // subscribers saw the re-fetched list
    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().len(), 1);
    assert!(management.render("%-m/%-d/%Y").starts_with("Customers (1)\n"));
}

#[tokio::test]
async fn test_duplicate_member_number_alerts_status() {
    let Screen {
        mut management,
        api,
        prompt,
    } = mounted_screen(&[]).await;

    fill(&mut management, "Alice", "1990-05-01", "1001");
    management.submit().await.unwrap();
    api.clear();

    fill(&mut management, "Bob", "1985-12-24", "1001");
    assert_eq!(management.submit().await.unwrap(), Outcome::Rejected(409));
    assert_eq!(
        prompt.alerts(),
        vec!["Customer added successfully", "Failed to add customer: 409"]
    );

    // no re-fetch, no local change, the form keeps what was typed
    assert_eq!(api.calls(), vec!["POST /customer"]);
    assert_eq!(management.customers().len(), 1);
    assert_eq!(management.form().name, "Bob");
}

#[tokio::test]
async fn test_missing_required_field_sends_nothing() {
    let Screen {
        mut management,
        api,
        prompt,
    } = mounted_screen(&[]).await;

    fill(&mut management, "Alice", "", "1001");
    let result = management.submit().await;

    assert!(matches!(result, Err(ManagementError::MissingField("dob"))));
    assert!(api.calls().is_empty());
    assert!(prompt.alerts().is_empty());
}

#[tokio::test]
async fn test_edit_prefills_and_cancel_clears() {
    let Screen {
        mut management,
        api,
        prompt,
    } = mounted_screen(&[]).await;

    fill(&mut management, "Alice", "1990-05-01", "1001");
    management.form_mut().interests = "chess".into();
    management.submit().await.unwrap();

    let alice = management.customers()[0].clone();
    management.begin_edit(&alice);
    assert!(management.is_editing());
    assert_eq!(
        management.form(),
        &CustomerForm {
            id: Some(alice.id),
            name: "Alice".into(),
            dob: "1990-05-01".into(),
            member_number: "1001".into(),
            interests: "chess".into(),
        }
    );

    management.cancel_edit();
    assert!(!management.is_editing());
    assert_eq!(management.form(), &CustomerForm::default());

    // edit again, this time for real
    api.clear();
    management.begin_edit(&alice);
    management.form_mut().interests = "chess, go".into();
    assert_eq!(management.submit().await.unwrap(), Outcome::Completed);

    assert_eq!(api.calls(), vec!["PUT /customer", "GET /customer"]);
    assert_eq!(prompt.alerts().last().unwrap(), "Customer updated successfully");
    assert!(!management.is_editing());
    assert_eq!(management.customers()[0].interests, "chess, go");
    assert_eq!(management.customers()[0].id, alice.id);
}

#[tokio::test]
async fn test_update_conflict_keeps_edit_mode() {
    let Screen {
        mut management,
        prompt,
        ..
    } = mounted_screen(&[]).await;

    fill(&mut management, "Alice", "1990-05-01", "1001");
    management.submit().await.unwrap();
    fill(&mut management, "Bob", "1985-12-24", "1002");
    management.submit().await.unwrap();

    let bob = management.customers()[1].clone();
    management.begin_edit(&bob);
    management.form_mut().member_number = "1001".into();

    assert_eq!(management.submit().await.unwrap(), Outcome::Rejected(409));
    assert_eq!(prompt.alerts().last().unwrap(), "Failed to update customer: 409");
    assert!(management.is_editing());
    assert_eq!(management.customers()[1].member_number, 1002);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let Screen {
        mut management,
        api,
        prompt,
    } = mounted_screen(&[false]).await;

    fill(&mut management, "Alice", "1990-05-01", "1001");
    management.submit().await.unwrap();
    api.clear();

    let id = management.customers()[0].id;
    assert_eq!(management.delete(id).await.unwrap(), Outcome::Declined);

    assert_eq!(prompt.questions(), vec!["Are you sure?"]);
    assert!(api.calls().is_empty());
    assert_eq!(management.customers().len(), 1);
}

#[tokio::test]
async fn test_confirmed_delete_removes_the_record() {
    let Screen {
        mut management,
        api,
        prompt,
    } = mounted_screen(&[true]).await;

    fill(&mut management, "Alice", "1990-05-01", "1001");
    management.submit().await.unwrap();
    api.clear();

    let id = management.customers()[0].id;
    assert_eq!(management.delete(id).await.unwrap(), Outcome::Completed);

    assert_eq!(api.calls(), vec![format!("DELETE /customer/{id}"), "GET /customer".into()]);
    assert_eq!(prompt.alerts().last().unwrap(), "Customer deleted successfully");
    assert!(management.customers().is_empty());
}

#[tokio::test]
async fn test_failed_delete_alerts_status() {
    let Screen {
        mut management,
        api,
        prompt,
    } = mounted_screen(&[true]).await;

    assert_eq!(
        management.delete(CustomerId(42)).await.unwrap(),
        Outcome::Rejected(404)
    );
    assert_eq!(prompt.alerts(), vec!["Failed to delete customer: 404"]);
    assert_eq!(api.calls(), vec!["DELETE /customer/42"]);
}

#[tokio::test]
async fn test_unreachable_server_is_an_error() {
    let api = CountingApi::new(&common::dead_url().await);
    let management = CustomerManagement::new(api, ScriptedPrompt::answering(&[]));

    assert!(matches!(
        management.mount().await,
        Err(ManagementError::Transport(_))
    ));
}

/// Accepts every write but cannot list: `GET /customer` always answers 500.
struct BrokenListApi;

impl BrokenListApi {
    fn saved(payload: &CustomerPayload, id: CustomerId) -> Customer {
        Customer::new(id, schema::cast(payload).unwrap())
    }
}

#[async_trait]
impl CustomerApi for BrokenListApi {
    async fn list(&self) -> Result<Vec<Customer>, TransportError> {
        Err(TransportError::Status(500))
    }

    async fn get(&self, _id: CustomerId) -> Result<Customer, TransportError> {
        Err(TransportError::Status(404))
    }

    async fn create(&self, payload: &CustomerPayload) -> Result<Customer, TransportError> {
        Ok(Self::saved(payload, CustomerId(1)))
    }

    async fn update(&self, payload: &CustomerPayload) -> Result<Customer, TransportError> {
        let id = payload.id.as_deref().unwrap().parse().unwrap();
        Ok(Self::saved(payload, id))
    }

    async fn delete(&self, _id: CustomerId) -> Result<(), TransportError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_failed_reload_after_create_still_reports_success() {
    let prompt = ScriptedPrompt::answering(&[]);
    let mut management = CustomerManagement::new(Arc::new(BrokenListApi), prompt.clone());

    fill(&mut management, "Alice", "1990-05-01", "1001");
    let result = management.submit().await;

    assert!(matches!(
        result,
        Err(ManagementError::Refresh(TransportError::Status(500)))
    ));
    assert_eq!(prompt.alerts(), vec!["Customer added successfully"]);
    assert_eq!(management.form(), &CustomerForm::default());
    assert!(management.customers().is_empty());
}

#[tokio::test]
async fn test_failed_reload_after_update_leaves_edit_mode() {
    let prompt = ScriptedPrompt::answering(&[]);
    let mut management = CustomerManagement::new(Arc::new(BrokenListApi), prompt.clone());

    let alice = Customer::new(
        CustomerId(3),
        CustomerDraft {
            name: "Alice".into(),
            dob: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            member_number: 1001,
            interests: String::new(),
        },
    );

    management.begin_edit(&alice);
    management.form_mut().interests = "go".into();
    let result = management.submit().await;

    assert!(matches!(
        result,
        Err(ManagementError::Refresh(TransportError::Status(500)))
    ));
    assert_eq!(prompt.alerts(), vec!["Customer updated successfully"]);
    assert!(!management.is_editing());
    assert_eq!(management.form(), &CustomerForm::default());
}

#[tokio::test]
async fn test_failed_reload_after_delete_still_reports_success() {
    let prompt = ScriptedPrompt::answering(&[true]);
    let mut management = CustomerManagement::new(Arc::new(BrokenListApi), prompt.clone());

    let result = management.delete(CustomerId(1)).await;

    assert!(matches!(
        result,
        Err(ManagementError::Refresh(TransportError::Status(500)))
    ));
    assert_eq!(prompt.alerts(), vec!["Customer deleted successfully"]);
}
