//! Admin-reseller messaging.
//!
//! Every reseller has one thread with the admin, stored inside the
//! reseller record. The admin can write to a single thread or broadcast
//! the same content to every thread; opening a thread marks everything
//! the reseller wrote as read.

use chrono::Utc;

use revendo_core::{Message, MessageId, MessageSender, Reseller, ResellerId};
use revendo_store::{Domain, JsonStore};

use crate::AdminError;

/// Admin-side messaging operations.
pub struct MessagingService<'a> {
    domain: &'a mut Domain,
    store: &'a JsonStore,
}

impl<'a> MessagingService<'a> {
    /// Create a messaging service over the domain state.
    pub fn new(domain: &'a mut Domain, store: &'a JsonStore) -> Self {
        Self { domain, store }
    }

    /// Send an admin message to one reseller's thread.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Validation`] for blank content.
    /// - [`AdminError::NotFound`] for an unknown reseller.
    pub fn send_private(
        &mut self,
        reseller_id: &ResellerId,
        content: &str,
    ) -> Result<MessageId, AdminError> {
        let content = non_blank(content)?;
        let reseller = self
            .domain
            .reseller_mut(reseller_id)
            .ok_or_else(|| AdminError::NotFound(format!("reseller {reseller_id}")))?;

        let message = admin_message(content);
        let id = message.id.clone();
        reseller.messages.push(message);
        self.domain.persist_resellers(self.store);
        Ok(id)
    }

    /// Broadcast an admin message to every reseller's thread.
    ///
    /// Each thread receives its own message (fresh ID) with identical
    /// content. Returns how many threads were written.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for blank content.
    pub fn broadcast(&mut self, content: &str) -> Result<usize, AdminError> {
        let content = non_blank(content)?;
        for reseller in &mut self.domain.resellers {
            reseller.messages.push(admin_message(content));
        }
        let fanout = self.domain.resellers.len();
        self.domain.persist_resellers(self.store);
        tracing::info!(fanout, "broadcast message sent");
        Ok(fanout)
    }

    /// Open a reseller's thread: mark every reseller-authored message
    /// read. Admin-authored read flags are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for an unknown reseller.
    pub fn open_thread(&mut self, reseller_id: &ResellerId) -> Result<(), AdminError> {
        let reseller = self
            .domain
            .reseller_mut(reseller_id)
            .ok_or_else(|| AdminError::NotFound(format!("reseller {reseller_id}")))?;

        let mut changed = false;
        for message in &mut reseller.messages {
            if message.sender == MessageSender::Reseller && !message.read {
                message.read = true;
                changed = true;
            }
        }
        if changed {
            self.domain.persist_resellers(self.store);
        }
        Ok(())
    }

    /// Unread badge: reseller-authored, unread messages across all
    /// threads.
    #[must_use]
    pub fn unread_total(&self) -> usize {
        self.domain
            .resellers
            .iter()
            .map(Reseller::unread_from_reseller)
            .sum()
    }
}

fn non_blank(content: &str) -> Result<&str, AdminError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(AdminError::Validation("message content is required".into()));
    }
    Ok(trimmed)
}

fn admin_message(content: &str) -> Message {
    Message {
        id: MessageId::generate(),
        sender: MessageSender::Admin,
        content: content.to_owned(),
        timestamp: Utc::now(),
        read: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revendo_core::{Email, PasswordHash};

    fn reseller(id: &str, name: &str) -> Reseller {
        Reseller {
            id: ResellerId::new(id),
            name: name.to_owned(),
            email: Email::parse(&format!("{}@tienda.com", name.to_lowercase())).expect("email"),
            password_hash: PasswordHash::from_hash("$2b$12$abcdefghijklmnopqrstuv"),
            region: "General".to_owned(),
            active: true,
            stock: Vec::new(),
            clients: Vec::new(),
            orders: Vec::new(),
            messages: Vec::new(),
            sales: Vec::new(),
            points: 0,
        }
    }

    fn setup() -> (tempfile::TempDir, JsonStore, Domain) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonStore::open(dir.path()).expect("open");
        let mut domain = Domain::default();
        domain.resellers.push(reseller("R-1", "Juana"));
        domain.resellers.push(reseller("R-2", "Marta"));
        (dir, store, domain)
    }

    fn reseller_message(content: &str, read: bool) -> Message {
        Message {
            id: MessageId::generate(),
            sender: MessageSender::Reseller,
            content: content.to_owned(),
            timestamp: Utc::now(),
            read,
        }
    }

    #[test]
    fn test_broadcast_appends_one_message_per_reseller() {
        let (_dir, store, mut domain) = setup();
        let fanout = MessagingService::new(&mut domain, &store)
            .broadcast("Llegó stock nuevo")
            .expect("broadcast");
        assert_eq!(fanout, 2);

        let mut ids = Vec::new();
        for r in &domain.resellers {
            assert_eq!(r.messages.len(), 1);
            let m = r.messages.first().expect("message");
            assert_eq!(m.sender, MessageSender::Admin);
            assert_eq!(m.content, "Llegó stock nuevo");
            ids.push(m.id.clone());
        }
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_open_thread_marks_only_reseller_messages() {
        let (_dir, store, mut domain) = setup();
        let id = ResellerId::new("R-1");
        {
            let r = domain.reseller_mut(&id).expect("reseller");
            r.messages.push(reseller_message("hola", false));
            r.messages.push(reseller_message("stock?", false));
            r.messages.push(admin_message("ya sale"));
        }

        MessagingService::new(&mut domain, &store)
            .open_thread(&id)
            .expect("open");

        let r = domain.reseller(&id).expect("reseller");
        assert!(r.messages[0].read);
        assert!(r.messages[1].read);
        // Admin-authored flag untouched.
        assert!(!r.messages[2].read);
    }

    #[test]
    fn test_unread_total_spans_resellers() {
        let (_dir, store, mut domain) = setup();
        domain
            .reseller_mut(&ResellerId::new("R-1"))
            .expect("reseller")
            .messages
            .push(reseller_message("hola", false));
        domain
            .reseller_mut(&ResellerId::new("R-2"))
            .expect("reseller")
            .messages
            .extend([
                reseller_message("pedido?", false),
                reseller_message("leído", true),
            ]);

        let service = MessagingService::new(&mut domain, &store);
        assert_eq!(service.unread_total(), 2);
    }

    #[test]
    fn test_blank_content_rejected() {
        let (_dir, store, mut domain) = setup();
        let err = MessagingService::new(&mut domain, &store)
            .broadcast("   ")
            .expect_err("must fail");
        assert!(matches!(err, AdminError::Validation(_)));
    }

    #[test]
    fn test_private_send_targets_one_thread() {
        let (_dir, store, mut domain) = setup();
        MessagingService::new(&mut domain, &store)
            .send_private(&ResellerId::new("R-2"), "Hola Marta")
            .expect("send");
        assert!(
            domain
                .reseller(&ResellerId::new("R-1"))
                .expect("reseller")
                .messages
                .is_empty()
        );
        assert_eq!(
            domain
                .reseller(&ResellerId::new("R-2"))
                .expect("reseller")
                .messages
                .len(),
            1
        );
    }
}
