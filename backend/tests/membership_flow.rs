use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU32, Ordering},
};

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use backend::usecases::{
    member_directory::{MemberDirectoryUseCase, MemberListQuery},
    moderation::MembershipModerationUseCase,
};
use crates::domain::{
    entities::{
        plans::SubscriptionPlanEntity,
        subscriptions::{InsertUserSubscriptionEntity, UserSubscriptionEntity},
        tourists::{InsertTouristEntity, TouristEntity},
        users::UserEntity,
    },
    repositories::{
        plans::PlanRepository, subscriptions::SubscriptionRepository,
        tourists::TouristRepository, users::UserRepository,
    },
    value_objects::enums::member_statuses::MemberStatus,
};

#[derive(Default)]
struct InMemoryStore {
    users: Mutex<Vec<UserEntity>>,
    tourists: Mutex<Vec<TouristEntity>>,
    subscriptions: Mutex<Vec<UserSubscriptionEntity>>,
    plans: Mutex<Vec<SubscriptionPlanEntity>>,
    next_id: AtomicU32,
}

impl InMemoryStore {
    fn fresh_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

struct UserStore(Arc<InMemoryStore>);
struct TouristStore(Arc<InMemoryStore>);
struct SubscriptionStore(Arc<InMemoryStore>);
struct PlanStore(Arc<InMemoryStore>);

#[async_trait]
impl UserRepository for UserStore {
    async fn list_users(&self) -> Result<Vec<UserEntity>> {
        Ok(self.0.users.lock().unwrap().clone())
    }

    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<UserEntity>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == user_id)
            .cloned())
    }
}

#[async_trait]
impl TouristRepository for TouristStore {
    async fn list_tourists(&self) -> Result<Vec<TouristEntity>> {
        Ok(self.0.tourists.lock().unwrap().clone())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<TouristEntity>> {
        Ok(self
            .0
            .tourists
            .lock()
            .unwrap()
            .iter()
            .find(|tourist| tourist.user_id == user_id)
            .cloned())
    }

    async fn create_tourist(&self, insert_tourist: InsertTouristEntity) -> Result<TouristEntity> {
        let tourist = TouristEntity {
            id: self.0.fresh_id("tourist"),
            user_id: insert_tourist.user_id,
            is_club_member: insert_tourist.is_club_member,
            subscription_date: insert_tourist.subscription_date,
            phone: insert_tourist.phone,
        };
        self.0.tourists.lock().unwrap().push(tourist.clone());
        Ok(tourist)
    }

    async fn set_club_membership(
        &self,
        tourist_id: &str,
        is_club_member: bool,
        subscription_date: Option<NaiveDate>,
    ) -> Result<()> {
        let mut tourists = self.0.tourists.lock().unwrap();
        let tourist = tourists
            .iter_mut()
            .find(|tourist| tourist.id == tourist_id)
            .ok_or_else(|| anyhow::anyhow!("tourist {tourist_id} not found"))?;
        tourist.is_club_member = is_club_member;
        tourist.subscription_date = subscription_date;
        Ok(())
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionStore {
    async fn list_subscriptions(&self) -> Result<Vec<UserSubscriptionEntity>> {
        Ok(self.0.subscriptions.lock().unwrap().clone())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserSubscriptionEntity>> {
        Ok(self
            .0
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|subscription| subscription.user_id == user_id)
            .cloned())
    }

    async fn create_subscription(
        &self,
        insert_subscription: InsertUserSubscriptionEntity,
    ) -> Result<UserSubscriptionEntity> {
        let subscription = UserSubscriptionEntity {
            id: self.0.fresh_id("subscription"),
            user_id: insert_subscription.user_id,
            plan_id: insert_subscription.plan_id,
            status: insert_subscription.status,
            payment_status: insert_subscription.payment_status,
            start_date: Some(insert_subscription.start_date),
            end_date: Some(insert_subscription.end_date),
            cancellation_reason: None,
        };
        self.0
            .subscriptions
            .lock()
            .unwrap()
            .push(subscription.clone());
        Ok(subscription)
    }

    async fn mark_active(
        &self,
        subscription_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<()> {
        let mut subscriptions = self.0.subscriptions.lock().unwrap();
        let subscription = subscriptions
            .iter_mut()
            .find(|subscription| subscription.id == subscription_id)
            .ok_or_else(|| anyhow::anyhow!("subscription {subscription_id} not found"))?;
        subscription.status = "active".to_string();
        subscription.payment_status = "completed".to_string();
        subscription.start_date = Some(start_date);
        subscription.end_date = Some(end_date);
        Ok(())
    }

    async fn mark_cancelled(&self, subscription_id: &str, reason: &str) -> Result<()> {
        let mut subscriptions = self.0.subscriptions.lock().unwrap();
        let subscription = subscriptions
            .iter_mut()
            .find(|subscription| subscription.id == subscription_id)
            .ok_or_else(|| anyhow::anyhow!("subscription {subscription_id} not found"))?;
        subscription.status = "cancelled".to_string();
        subscription.cancellation_reason = Some(reason.to_string());
        Ok(())
    }

    async fn mark_pending(&self, subscription_id: &str) -> Result<()> {
        let mut subscriptions = self.0.subscriptions.lock().unwrap();
        let subscription = subscriptions
            .iter_mut()
            .find(|subscription| subscription.id == subscription_id)
            .ok_or_else(|| anyhow::anyhow!("subscription {subscription_id} not found"))?;
        subscription.status = "pending".to_string();
        Ok(())
    }
}

#[async_trait]
impl PlanRepository for PlanStore {
    async fn list_plans(&self) -> Result<Vec<SubscriptionPlanEntity>> {
        Ok(self.0.plans.lock().unwrap().clone())
    }

    async fn find_plan_by_id(&self, plan_id: &str) -> Result<Option<SubscriptionPlanEntity>> {
        Ok(self
            .0
            .plans
            .lock()
            .unwrap()
            .iter()
            .find(|plan| plan.id == plan_id)
            .cloned())
    }
}

fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::default());

    store.users.lock().unwrap().push(UserEntity {
        id: "u1".to_string(),
        full_name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        role: "tourist".to_string(),
        business_id: None,
        realtor_id: None,
    });
    store.plans.lock().unwrap().push(SubscriptionPlanEntity {
        id: "p1".to_string(),
        name: "Clube Trimestral".to_string(),
        price: 129.9,
        period: "trimestral".to_string(),
        plan_type: None,
        features: vec![],
        is_featured: false,
        position: 0,
        stripe_price_id: None,
    });
    store
        .subscriptions
        .lock()
        .unwrap()
        .push(UserSubscriptionEntity {
            id: "s1".to_string(),
            user_id: "u1".to_string(),
            plan_id: "p1".to_string(),
            status: "pending".to_string(),
            payment_status: "pending".to_string(),
            start_date: None,
            end_date: None,
            cancellation_reason: None,
        });

    store
}

fn all_members_query() -> MemberListQuery {
    MemberListQuery {
        search: None,
        status: None,
        page: None,
    }
}

#[tokio::test]
async fn pending_member_becomes_member_after_approval() {
    let store = seeded_store();

    let directory = MemberDirectoryUseCase::new(
        Arc::new(UserStore(Arc::clone(&store))),
        Arc::new(TouristStore(Arc::clone(&store))),
        Arc::new(SubscriptionStore(Arc::clone(&store))),
        Arc::new(PlanStore(Arc::clone(&store))),
    );
    let moderation = MembershipModerationUseCase::new(
        Arc::new(TouristStore(Arc::clone(&store))),
        Arc::new(SubscriptionStore(Arc::clone(&store))),
        Arc::new(PlanStore(Arc::clone(&store))),
    );

    // First listing backfills the missing tourist record and classifies the
    // paid-but-unapproved subscription as pending.
    let page = directory.list_members(all_members_query()).await.unwrap();
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].status, MemberStatus::Pending);
    assert!(page.items[0].tourist.is_some());
    assert_eq!(store.tourists.lock().unwrap().len(), 1);

    let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let approved = moderation.approve("u1", "p1", Some(start)).await.unwrap();
    assert_eq!(approved.end_date, NaiveDate::from_ymd_opt(2024, 4, 15).unwrap());

    let page = directory.list_members(all_members_query()).await.unwrap();
    let row = &page.items[0];
    assert_eq!(row.status, MemberStatus::Member);
    assert!(row.tourist.as_ref().unwrap().is_club_member);
    assert_eq!(row.plan.as_ref().unwrap().id, "p1");
    assert_eq!(
        row.subscription.as_ref().unwrap().end_date,
        NaiveDate::from_ymd_opt(2024, 4, 15)
    );
}

#[tokio::test]
async fn rejected_member_drops_back_to_non_member() {
    let store = seeded_store();

    let directory = MemberDirectoryUseCase::new(
        Arc::new(UserStore(Arc::clone(&store))),
        Arc::new(TouristStore(Arc::clone(&store))),
        Arc::new(SubscriptionStore(Arc::clone(&store))),
        Arc::new(PlanStore(Arc::clone(&store))),
    );
    let moderation = MembershipModerationUseCase::new(
        Arc::new(TouristStore(Arc::clone(&store))),
        Arc::new(SubscriptionStore(Arc::clone(&store))),
        Arc::new(PlanStore(Arc::clone(&store))),
    );

    moderation.reject("u1").await.unwrap();

    let page = directory.list_members(all_members_query()).await.unwrap();
    assert_eq!(page.items[0].status, MemberStatus::NonMember);

    let subscriptions = store.subscriptions.lock().unwrap();
    assert_eq!(subscriptions[0].status, "cancelled");
    assert!(subscriptions[0].cancellation_reason.is_some());
}
