//! Admin-reseller message threads: private sends, broadcasts, and
//! read tracking.

use revendo_admin::{MessagingService, ResellerService};
use revendo_core::{MessageSender, ResellerId};
use revendo_reseller::Portal;

use revendo_integration_tests::{TestContext, reseller_draft};

fn two_resellers(ctx: &mut TestContext) -> (ResellerId, ResellerId) {
    let mut resellers = ResellerService::new(&mut ctx.domain, &ctx.store);
    let juana = resellers
        .save_reseller(reseller_draft("Juana", "juana@tienda.com", "secreta1"))
        .expect("reseller");
    let lucia = resellers
        .save_reseller(reseller_draft("Lucía", "lucia@tienda.com", "secreta2"))
        .expect("reseller");
    (juana, lucia)
}

#[test]
fn test_private_message_lands_in_one_thread() {
    let mut ctx = TestContext::new();
    let (juana, lucia) = two_resellers(&mut ctx);

    let mut messaging = MessagingService::new(&mut ctx.domain, &ctx.store);
    messaging
        .send_private(&juana, "Llega stock el lunes")
        .expect("send");

    let juana_thread = &ctx.domain.reseller(&juana).expect("reseller").messages;
    assert_eq!(juana_thread.len(), 1);
    let message = juana_thread.first().expect("message");
    assert_eq!(message.sender, MessageSender::Admin);
    assert!(!message.read);
    assert!(
        ctx.domain
            .reseller(&lucia)
            .expect("reseller")
            .messages
            .is_empty()
    );
}

#[test]
fn test_broadcast_gives_each_thread_its_own_message() {
    let mut ctx = TestContext::new();
    let (juana, lucia) = two_resellers(&mut ctx);

    let mut messaging = MessagingService::new(&mut ctx.domain, &ctx.store);
    let fanout = messaging.broadcast("Promo de mayo").expect("broadcast");
    assert_eq!(fanout, 2);

    let juana_msg = ctx
        .domain
        .reseller(&juana)
        .expect("reseller")
        .messages
        .first()
        .cloned()
        .expect("message");
    let lucia_msg = ctx
        .domain
        .reseller(&lucia)
        .expect("reseller")
        .messages
        .first()
        .cloned()
        .expect("message");

    assert_eq!(juana_msg.content, lucia_msg.content);
    // Same content, distinct message identities.
    assert_ne!(juana_msg.id, lucia_msg.id);
}

#[test]
fn test_opening_a_thread_marks_only_reseller_messages_read() {
    let mut ctx = TestContext::new();
    let (juana, _) = two_resellers(&mut ctx);

    {
        let mut portal = Portal::open(&mut ctx.domain, &ctx.store, juana.clone()).expect("portal");
        portal.send_message("Necesito reposición").expect("send");
        portal.send_message("¿Hay promos este mes?").expect("send");
    }

    let mut messaging = MessagingService::new(&mut ctx.domain, &ctx.store);
    messaging.send_private(&juana, "Respondo en breve").expect("send");
    assert_eq!(messaging.unread_total(), 2);

    messaging.open_thread(&juana).expect("open");
    assert_eq!(messaging.unread_total(), 0);

    // The admin's own message keeps its unread flag for the reseller side.
    let thread = &ctx.domain.reseller(&juana).expect("reseller").messages;
    let admin_msg = thread
        .iter()
        .find(|m| m.sender == MessageSender::Admin)
        .expect("admin message");
    assert!(!admin_msg.read);
    assert!(
        thread
            .iter()
            .filter(|m| m.sender == MessageSender::Reseller)
            .all(|m| m.read)
    );
}

#[test]
fn test_threads_survive_reload() {
    let mut ctx = TestContext::new();
    let (juana, _) = two_resellers(&mut ctx);

    {
        let mut messaging = MessagingService::new(&mut ctx.domain, &ctx.store);
        messaging.broadcast("Catálogo actualizado").expect("broadcast");
    }

    let reloaded = ctx.reload();
    let thread = &reloaded.reseller(&juana).expect("reseller").messages;
    assert_eq!(thread.len(), 1);
    assert_eq!(thread.first().expect("message").content, "Catálogo actualizado");
}
