use serde::Serialize;

use crate::domain::entities::{
    plans::SubscriptionPlanEntity, subscriptions::UserSubscriptionEntity, tourists::TouristEntity,
    users::UserEntity,
};
use crate::domain::value_objects::enums::{
    member_statuses::MemberStatus, subscription_statuses::SubscriptionStatus,
};

/// Denormalized, ephemeral row combining a user with its tourist record,
/// subscription and plan. Rebuilt from the source collections on every load,
/// never cached.
#[derive(Debug, Clone, Serialize)]
pub struct MemberRow {
    pub user: UserEntity,
    pub tourist: Option<TouristEntity>,
    pub subscription: Option<UserSubscriptionEntity>,
    pub plan: Option<SubscriptionPlanEntity>,
    pub status: MemberStatus,
}

#[derive(Debug, Clone, Default)]
pub struct MemberRowFilter {
    pub search: Option<String>,
    pub status: Option<MemberStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Pure classification of the joined tuple. Total over every combination of
/// absent/present secondary data.
pub fn classify_membership(
    tourist: Option<&TouristEntity>,
    subscription: Option<&UserSubscriptionEntity>,
) -> MemberStatus {
    match tourist {
        Some(tourist) if tourist.is_club_member => MemberStatus::Member,
        _ => match subscription {
            Some(subscription)
                if SubscriptionStatus::from_str(&subscription.status)
                    == SubscriptionStatus::Pending =>
            {
                MemberStatus::Pending
            }
            _ => MemberStatus::NonMember,
        },
    }
}

/// Primary-preserving left join: exactly one row per user, first match wins
/// in each secondary collection, absence yields `None`. The plan is joined
/// through the subscription's `plan_id`.
pub fn build_member_rows(
    users: Vec<UserEntity>,
    tourists: &[TouristEntity],
    subscriptions: &[UserSubscriptionEntity],
    plans: &[SubscriptionPlanEntity],
) -> Vec<MemberRow> {
    users
        .into_iter()
        .map(|user| {
            let tourist = tourists
                .iter()
                .find(|tourist| tourist.user_id == user.id)
                .cloned();
            let subscription = subscriptions
                .iter()
                .find(|subscription| subscription.user_id == user.id)
                .cloned();
            let plan = subscription.as_ref().and_then(|subscription| {
                plans.iter().find(|plan| plan.id == subscription.plan_id).cloned()
            });
            let status = classify_membership(tourist.as_ref(), subscription.as_ref());

            MemberRow {
                user,
                tourist,
                subscription,
                plan,
                status,
            }
        })
        .collect()
}

/// Conjunction of independent predicates; application order does not affect
/// the result.
pub fn apply_filter(rows: Vec<MemberRow>, filter: &MemberRowFilter) -> Vec<MemberRow> {
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    rows.into_iter()
        .filter(|row| {
            if let Some(status) = filter.status {
                if row.status != status {
                    return false;
                }
            }
            match search.as_deref() {
                Some(term) => row_matches_search(row, term),
                None => true,
            }
        })
        .collect()
}

fn row_matches_search(row: &MemberRow, term: &str) -> bool {
    let phone = row
        .tourist
        .as_ref()
        .and_then(|tourist| tourist.phone.as_deref())
        .unwrap_or_default();

    row.user.full_name.to_lowercase().contains(term)
        || row.user.email.to_lowercase().contains(term)
        || phone.to_lowercase().contains(term)
}

/// Fixed-size pagination with clamping: out-of-range requests resolve to the
/// first or last valid page instead of erroring. A zero page size is treated
/// as one item per page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = std::cmp::max(1, total_items.div_ceil(page_size));
    let page = page.clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, full_name: &str, email: &str) -> UserEntity {
        UserEntity {
            id: id.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            role: "tourist".to_string(),
            business_id: None,
            realtor_id: None,
        }
    }

    fn tourist(user_id: &str, is_club_member: bool) -> TouristEntity {
        TouristEntity {
            id: format!("t-{user_id}"),
            user_id: user_id.to_string(),
            is_club_member,
            subscription_date: None,
            phone: Some("(11) 99999-0000".to_string()),
        }
    }

    fn subscription(user_id: &str, plan_id: &str, status: &str) -> UserSubscriptionEntity {
        UserSubscriptionEntity {
            id: format!("s-{user_id}"),
            user_id: user_id.to_string(),
            plan_id: plan_id.to_string(),
            status: status.to_string(),
            payment_status: "pending".to_string(),
            start_date: None,
            end_date: None,
            cancellation_reason: None,
        }
    }

    fn plan(id: &str) -> SubscriptionPlanEntity {
        SubscriptionPlanEntity {
            id: id.to_string(),
            name: "Clube".to_string(),
            price: 49.9,
            period: "mensal".to_string(),
            plan_type: None,
            features: vec![],
            is_featured: false,
            position: 0,
            stripe_price_id: None,
        }
    }

    #[test]
    fn produces_one_row_per_user_with_null_secondaries() {
        let users = vec![user("1", "Ana", "ana@example.com"), user("2", "Bia", "bia@example.com")];
        let tourists = vec![tourist("1", true)];

        let rows = build_member_rows(users, &tourists, &[], &[]);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].tourist.is_some());
        assert!(rows[0].subscription.is_none());
        assert!(rows[1].tourist.is_none());
        assert!(rows[1].plan.is_none());
        assert_eq!(rows[1].status, MemberStatus::NonMember);
    }

    #[test]
    fn joins_plan_through_subscription() {
        let users = vec![user("1", "Ana", "ana@example.com")];
        let subscriptions = vec![subscription("1", "p1", "pending")];
        let plans = vec![plan("p1")];

        let rows = build_member_rows(users, &[], &subscriptions, &plans);

        assert_eq!(rows[0].plan.as_ref().unwrap().id, "p1");
        assert_eq!(rows[0].status, MemberStatus::Pending);
    }

    #[test]
    fn first_matching_secondary_wins() {
        let users = vec![user("1", "Ana", "ana@example.com")];
        let subscriptions = vec![
            subscription("1", "p1", "pending"),
            subscription("1", "p2", "active"),
        ];

        let rows = build_member_rows(users, &[], &subscriptions, &[]);

        assert_eq!(rows[0].subscription.as_ref().unwrap().plan_id, "p1");
    }

    #[test]
    fn classification_is_total_over_all_combinations() {
        let member = tourist("1", true);
        let non_member = tourist("1", false);
        let pending = subscription("1", "p1", "pending");
        let active = subscription("1", "p1", "active");
        let unknown = subscription("1", "p1", "???");

        assert_eq!(classify_membership(None, None), MemberStatus::NonMember);
        assert_eq!(classify_membership(Some(&member), None), MemberStatus::Member);
        assert_eq!(
            classify_membership(Some(&member), Some(&pending)),
            MemberStatus::Member
        );
        assert_eq!(
            classify_membership(Some(&non_member), Some(&pending)),
            MemberStatus::Pending
        );
        assert_eq!(classify_membership(None, Some(&pending)), MemberStatus::Pending);
        assert_eq!(classify_membership(None, Some(&active)), MemberStatus::NonMember);
        assert_eq!(classify_membership(None, Some(&unknown)), MemberStatus::NonMember);
        assert_eq!(
            classify_membership(Some(&non_member), None),
            MemberStatus::NonMember
        );
    }

    #[test]
    fn search_and_status_filters_commute() {
        let users = vec![
            user("1", "Ana Souza", "ana@example.com"),
            user("2", "Bianca Souza", "bia@example.com"),
            user("3", "Carlos Lima", "carlos@example.com"),
        ];
        let tourists = vec![tourist("1", true), tourist("2", false)];
        let subscriptions = vec![subscription("2", "p1", "pending")];
        let rows = build_member_rows(users, &tourists, &subscriptions, &[]);

        let search_only = MemberRowFilter {
            search: Some("souza".to_string()),
            status: None,
        };
        let status_only = MemberRowFilter {
            search: None,
            status: Some(MemberStatus::Pending),
        };
        let both = MemberRowFilter {
            search: Some("souza".to_string()),
            status: Some(MemberStatus::Pending),
        };

        let search_then_status = apply_filter(apply_filter(rows.clone(), &search_only), &status_only);
        let status_then_search = apply_filter(apply_filter(rows.clone(), &status_only), &search_only);
        let combined = apply_filter(rows, &both);

        let ids = |rows: &[MemberRow]| {
            rows.iter().map(|row| row.user.id.clone()).collect::<Vec<_>>()
        };
        assert_eq!(ids(&search_then_status), ids(&status_then_search));
        assert_eq!(ids(&search_then_status), ids(&combined));
        assert_eq!(ids(&combined), vec!["2".to_string()]);
    }

    #[test]
    fn search_is_case_insensitive_and_covers_phone() {
        let users = vec![user("1", "Ana", "Ana@Example.com")];
        let tourists = vec![tourist("1", false)];
        let rows = build_member_rows(users, &tourists, &[], &[]);

        let by_email = MemberRowFilter {
            search: Some("ANA@EXAMPLE".to_string()),
            status: None,
        };
        assert_eq!(apply_filter(rows.clone(), &by_email).len(), 1);

        let by_phone = MemberRowFilter {
            search: Some("99999".to_string()),
            status: None,
        };
        assert_eq!(apply_filter(rows, &by_phone).len(), 1);
    }

    #[test]
    fn pagination_clamps_out_of_range_pages() {
        let items: Vec<u32> = (1..=25).collect();

        let first = paginate(items.clone(), 0, 10);
        assert_eq!(first.page, 1);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());

        let last = paginate(items.clone(), 99, 10);
        assert_eq!(last.page, 3);
        assert_eq!(last.items, (21..=25).collect::<Vec<_>>());
        assert_eq!(last.total_pages, 3);
        assert_eq!(last.total_items, 25);
    }

    #[test]
    fn zero_page_size_falls_back_to_one_item_per_page() {
        let items: Vec<u32> = (1..=3).collect();

        let page = paginate(items, 2, 0);

        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![2]);
    }

    #[test]
    fn empty_input_yields_a_single_empty_page() {
        let page = paginate(Vec::<u32>::new(), 5, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }
}
