//! Foreign-key graph resolution
//!
//! Attaches relationship data to each raw record before indexing:
//! users gain their organization and the tickets they submitted or were
//! assigned; tickets gain their organization, submitter, and assignee.
//! Resolution is best-effort: a dangling foreign key leaves the
//! relationship as `None`, never an error. When duplicate ids exist the
//! first match in collection order wins.

use tracing::debug;

use crate::models::{Organization, RecordId, Ticket, User};
use crate::store::DataSet;

/// A user with resolved relationships
#[derive(Debug, Clone)]
pub struct EnrichedUser {
    pub record: User,
    pub organization: Option<Organization>,
    /// Tickets whose submitter is this user, in source collection order
    pub submitted_tickets: Vec<Ticket>,
    /// Tickets assigned to this user, in source collection order
    pub assigned_tickets: Vec<Ticket>,
}

/// A ticket with resolved relationships
#[derive(Debug, Clone)]
pub struct EnrichedTicket {
    pub record: Ticket,
    pub organization: Option<Organization>,
    pub submitter: Option<User>,
    pub assignee: Option<User>,
}

/// An organization; join target only, no outbound edges to resolve
#[derive(Debug, Clone)]
pub struct EnrichedOrganization {
    pub record: Organization,
}

/// The fully enriched snapshot consumed by the index builder
#[derive(Debug, Clone)]
pub struct EnrichedGraph {
    pub users: Vec<EnrichedUser>,
    pub organizations: Vec<EnrichedOrganization>,
    pub tickets: Vec<EnrichedTicket>,
}

/// Resolve every foreign key in the data set into an enriched graph.
pub fn enrich(data: &DataSet) -> EnrichedGraph {
    let users = data
        .users
        .iter()
        .map(|user| build_user_graph(user, &data.organizations, &data.tickets))
        .collect();

    let organizations = data
        .organizations
        .iter()
        .map(|org| EnrichedOrganization {
            record: org.clone(),
        })
        .collect();

    let tickets = data
        .tickets
        .iter()
        .map(|ticket| build_ticket_graph(ticket, &data.organizations, &data.users))
        .collect();

    let graph = EnrichedGraph {
        users,
        organizations,
        tickets,
    };

    debug!(
        users = graph.users.len(),
        organizations = graph.organizations.len(),
        tickets = graph.tickets.len(),
        "Resolved relationship graph"
    );

    graph
}

/// Attach organization and submitted/assigned ticket lists to one user.
pub fn build_user_graph(
    user: &User,
    organizations: &[Organization],
    tickets: &[Ticket],
) -> EnrichedUser {
    let organization = user
        .organization_id
        .as_ref()
        .and_then(|org_id| find_organization(organizations, org_id));

    let submitted_tickets = tickets
        .iter()
        .filter(|t| t.submitter_id.as_ref() == Some(&user.id))
        .cloned()
        .collect();

    let assigned_tickets = tickets
        .iter()
        .filter(|t| t.assignee_id.as_ref() == Some(&user.id))
        .cloned()
        .collect();

    EnrichedUser {
        record: user.clone(),
        organization,
        submitted_tickets,
        assigned_tickets,
    }
}

/// Attach organization, submitter, and assignee to one ticket.
pub fn build_ticket_graph(
    ticket: &Ticket,
    organizations: &[Organization],
    users: &[User],
) -> EnrichedTicket {
    let organization = ticket
        .organization_id
        .as_ref()
        .and_then(|org_id| find_organization(organizations, org_id));

    let submitter = ticket
        .submitter_id
        .as_ref()
        .and_then(|id| find_user(users, id));

    let assignee = ticket
        .assignee_id
        .as_ref()
        .and_then(|id| find_user(users, id));

    EnrichedTicket {
        record: ticket.clone(),
        organization,
        submitter,
        assignee,
    }
}

fn find_organization(organizations: &[Organization], id: &RecordId) -> Option<Organization> {
    organizations.iter().find(|o| &o.id == id).cloned()
}

fn find_user(users: &[User], id: &RecordId) -> Option<User> {
    users.iter().find(|u| &u.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, org_id: Option<&str>) -> User {
        serde_json::from_str(&format!(
            r#"{{"_id": "{}", "name": "user-{}"{}}}"#,
            id,
            id,
            org_id
                .map(|o| format!(r#", "organization_id": "{}""#, o))
                .unwrap_or_default()
        ))
        .unwrap()
    }

    fn org(id: &str) -> Organization {
        serde_json::from_str(&format!(r#"{{"_id": "{}", "name": "org-{}"}}"#, id, id)).unwrap()
    }

    fn ticket(id: &str, submitter: Option<&str>, assignee: Option<&str>) -> Ticket {
        let mut fields = vec![format!(r#""_id": "{}""#, id), format!(r#""subject": "t-{}""#, id)];
        if let Some(s) = submitter {
            fields.push(format!(r#""submitter_id": "{}""#, s));
        }
        if let Some(a) = assignee {
            fields.push(format!(r#""assignee_id": "{}""#, a));
        }
        serde_json::from_str(&format!("{{{}}}", fields.join(", "))).unwrap()
    }

    #[test]
    fn user_graph_attaches_organization_and_tickets() {
        let u = user("1", Some("101"));
        let orgs = vec![org("100"), org("101")];
        let tickets = vec![
            ticket("t1", Some("1"), None),
            ticket("t2", None, Some("1")),
            ticket("t3", Some("1"), Some("1")),
        ];

        let enriched = build_user_graph(&u, &orgs, &tickets);
        assert_eq!(
            enriched.organization.as_ref().unwrap().id.as_str(),
            "101"
        );
        assert_eq!(enriched.submitted_tickets.len(), 2);
        assert_eq!(enriched.assigned_tickets.len(), 2);
        // Source collection order preserved
        assert_eq!(enriched.submitted_tickets[0].id.as_str(), "t1");
        assert_eq!(enriched.submitted_tickets[1].id.as_str(), "t3");
    }

    #[test]
    fn unresolved_foreign_keys_are_absent_not_errors() {
        let u = user("1", Some("999"));
        let enriched = build_user_graph(&u, &[org("101")], &[]);
        assert!(enriched.organization.is_none());

        let t = ticket("t1", Some("42"), None);
        let enriched = build_ticket_graph(&t, &[], &[user("1", None)]);
        assert!(enriched.organization.is_none());
        assert!(enriched.submitter.is_none());
        assert!(enriched.assignee.is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_match() {
        let mut first = org("101");
        first.name = Some("first".to_string());
        let mut second = org("101");
        second.name = Some("second".to_string());

        let u = user("1", Some("101"));
        let enriched = build_user_graph(&u, &[first, second], &[]);
        assert_eq!(
            enriched.organization.unwrap().name.as_deref(),
            Some("first")
        );
    }
}
