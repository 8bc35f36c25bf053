//! Tests for session registration and event routing.

mod test_utils;

use quire_core::{ChannelId, InputEvent, MessageHandle, MessageId};
use quire_error::{SessionErrorKind, TransportErrorKind};
use quire_interface::{AllowAll, DenyAll, PermissionOracle, Transport};
use quire_pages::{DisplayOptions, JumpVisibility};
use quire_session::{Session, SessionContext, SessionDispatcher, Transition};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{CHANNEL, Call, OWNER, Op, RecordingTransport, flat_paginator, settle};

fn dispatcher(
    permissions: Arc<dyn PermissionOracle>,
) -> (SessionDispatcher, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    let dispatcher =
        SessionDispatcher::new(Arc::clone(&transport) as Arc<dyn Transport>, permissions);
    (dispatcher, transport)
}

fn session(pages: usize, options: DisplayOptions) -> Session {
    Session::new(
        flat_paginator(pages, options),
        SessionContext::new(CHANNEL, OWNER),
    )
}

#[tokio::test]
async fn test_display_registers_and_attaches_affordances() {
    let (dispatcher, transport) = dispatcher(Arc::new(AllowAll));

    let handle = dispatcher
        .display(session(3, DisplayOptions::default()))
        .await
        .expect("Display succeeds");
    settle().await;

    assert!(dispatcher.is_registered(handle));
    assert_eq!(dispatcher.current_index(handle).await, Some(1));
    let first = &transport.sends()[0];
    let embed = first.embed().as_ref().expect("Page has an embed");
    assert_eq!(embed.footer().as_deref(), Some("Page 1/3"));
    assert_eq!(
        transport.added_symbols(),
        vec!["⏮", "◀", "▶", "⏭", "🔢", "⏹", "ℹ"]
    );
}

#[tokio::test]
async fn test_single_page_is_not_registered() {
    let (dispatcher, transport) = dispatcher(Arc::new(AllowAll));

    let handle = dispatcher
        .display(session(1, DisplayOptions::default()))
        .await
        .expect("Display succeeds");
    settle().await;

    assert!(!dispatcher.is_registered(handle));
    assert_eq!(dispatcher.session_count(), 0);
    assert_eq!(transport.count(Op::AddAffordance), 0);
    let embed = transport.sends()[0]
        .embed()
        .clone()
        .expect("Page has an embed");
    assert_eq!(embed.footer(), &None);
}

#[tokio::test]
async fn test_failed_first_send_is_an_error() {
    let (dispatcher, transport) = dispatcher(Arc::new(AllowAll));
    transport.fail(Op::Send, TransportErrorKind::Forbidden("no access".to_string()));

    let error = dispatcher
        .display(session(3, DisplayOptions::default()))
        .await
        .expect_err("Display fails");

    assert!(matches!(error.kind, SessionErrorKind::InitialRenderFailed(_)));
    assert_eq!(dispatcher.session_count(), 0);
}

#[tokio::test]
async fn test_jump_visibility() {
    let cases: [(JumpVisibility, Arc<dyn PermissionOracle>, bool); 4] = [
        (JumpVisibility::WithElevatedPermission, Arc::new(AllowAll), true),
        (JumpVisibility::WithElevatedPermission, Arc::new(DenyAll), false),
        (JumpVisibility::Always, Arc::new(DenyAll), true),
        (JumpVisibility::Never, Arc::new(AllowAll), false),
    ];
    for (visibility, permissions, expected) in cases {
        let (dispatcher, transport) = dispatcher(permissions);
        let options = DisplayOptions::default().with_jump_visibility(visibility);
        dispatcher
            .display(session(3, options))
            .await
            .expect("Display succeeds");
        settle().await;

        let has_jump = transport.added_symbols().iter().any(|s| s == "🔢");
        assert_eq!(has_jump, expected, "{:?}", visibility);
    }
}

#[tokio::test]
async fn test_info_icon_can_be_hidden() {
    let (dispatcher, transport) = dispatcher(Arc::new(DenyAll));
    let options = DisplayOptions::default().with_display_info_icon(false);
    dispatcher
        .display(session(3, options))
        .await
        .expect("Display succeeds");
    settle().await;

    assert_eq!(transport.added_symbols(), vec!["⏮", "◀", "▶", "⏭", "⏹"]);
}

#[tokio::test]
async fn test_hidden_jump_is_ignored() {
    let (dispatcher, _transport) = dispatcher(Arc::new(DenyAll));
    let handle = dispatcher
        .display(session(3, DisplayOptions::default()))
        .await
        .expect("Display succeeds");

    assert_eq!(
        dispatcher
            .dispatch(&InputEvent::new(handle, "🔢", OWNER))
            .await,
        Transition::Ignored
    );
}

#[tokio::test]
async fn test_unknown_symbol_is_ignored() {
    let (dispatcher, transport) = dispatcher(Arc::new(AllowAll));
    let handle = dispatcher
        .display(session(3, DisplayOptions::default()))
        .await
        .expect("Display succeeds");
    settle().await;
    let calls = transport.calls().len();

    assert_eq!(
        dispatcher
            .dispatch(&InputEvent::new(handle, "👍", OWNER))
            .await,
        Transition::Ignored
    );
    assert_eq!(transport.calls().len(), calls);
}

#[tokio::test]
async fn test_unknown_message_is_ignored() {
    let (dispatcher, transport) = dispatcher(Arc::new(AllowAll));
    let stranger = MessageHandle::new(ChannelId(9), MessageId(9));

    assert_eq!(
        dispatcher
            .dispatch(&InputEvent::new(stranger, "▶", OWNER))
            .await,
        Transition::Ignored
    );
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_any_user_can_navigate() {
    let (dispatcher, _transport) = dispatcher(Arc::new(AllowAll));
    let handle = dispatcher
        .display(session(3, DisplayOptions::default()))
        .await
        .expect("Display succeeds");

    assert_eq!(
        dispatcher
            .dispatch(&InputEvent::new(handle, "▶", test_utils::STRANGER))
            .await,
        Transition::Moved { from: 1, to: 2 }
    );
}

#[tokio::test]
async fn test_stop_unregisters_session() {
    let (dispatcher, transport) = dispatcher(Arc::new(AllowAll));
    let handle = dispatcher
        .display(session(3, DisplayOptions::default()))
        .await
        .expect("Display succeeds");
    settle().await;

    let stop = InputEvent::new(handle, "⏹", OWNER);
    assert_eq!(dispatcher.dispatch(&stop).await, Transition::Disposed);
    assert_eq!(dispatcher.dispatch(&stop).await, Transition::Ignored);

    assert!(!dispatcher.is_registered(handle));
    assert_eq!(transport.count(Op::RemoveAll), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stop_during_slow_affordances_leaves_none_behind() {
    let (dispatcher, transport) = dispatcher(Arc::new(AllowAll));
    transport.delay_affordances(Duration::from_millis(50));
    let handle = dispatcher
        .display(session(5, DisplayOptions::default()))
        .await
        .expect("Display succeeds");

    // Second affordance is in flight when Stop arrives.
    tokio::time::sleep(Duration::from_millis(75)).await;
    let stop = InputEvent::new(handle, "⏹", OWNER);
    assert_eq!(dispatcher.dispatch(&stop).await, Transition::Disposed);
    tokio::time::sleep(Duration::from_secs(1)).await;

    let calls = transport.calls();
    let teardown = calls
        .iter()
        .position(|call| matches!(call, Call::RemoveAll { .. }))
        .expect("Stop removes affordances");
    assert!(
        !calls[teardown..]
            .iter()
            .any(|call| matches!(call, Call::AddAffordance { .. })),
        "no affordance attached after teardown: {:?}",
        &calls[teardown..]
    );
    assert_eq!(transport.added_symbols(), vec!["⏮", "◀"]);
    assert!(!dispatcher.is_registered(handle));
}

#[tokio::test]
async fn test_deleted_message_unregisters_session() {
    let (dispatcher, transport) = dispatcher(Arc::new(AllowAll));
    let handle = dispatcher
        .display(session(3, DisplayOptions::default()))
        .await
        .expect("Display succeeds");
    settle().await;
    transport.fail(Op::Edit, TransportErrorKind::NotFound);

    dispatcher
        .dispatch(&InputEvent::new(handle, "▶", OWNER))
        .await;

    assert!(!dispatcher.is_registered(handle));
}

#[tokio::test]
async fn test_missing_message_stops_affordances() {
    let (dispatcher, transport) = dispatcher(Arc::new(AllowAll));
    transport.fail(Op::AddAffordance, TransportErrorKind::NotFound);

    let handle = dispatcher
        .display(session(3, DisplayOptions::default()))
        .await
        .expect("Display succeeds");
    settle().await;

    assert!(!dispatcher.is_registered(handle));
    assert_eq!(transport.count(Op::RemoveAll), 0);
}

#[tokio::test]
async fn test_register_rejects_duplicate_handle() {
    let (dispatcher, _transport) = dispatcher(Arc::new(AllowAll));
    let handle = dispatcher
        .display(session(3, DisplayOptions::default()))
        .await
        .expect("Display succeeds");

    let transport = Arc::new(RecordingTransport::new());
    let duplicate = quire_session::NavigationController::new(
        flat_paginator(3, DisplayOptions::default()),
        SessionContext::new(CHANNEL, OWNER),
        handle,
        false,
        transport as Arc<dyn Transport>,
    );
    let error = dispatcher
        .register(handle, duplicate)
        .expect_err("Handle already registered");

    assert!(matches!(error.kind, SessionErrorKind::AlreadyRegistered(_)));
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let (dispatcher, _transport) = dispatcher(Arc::new(AllowAll));
    let a = dispatcher
        .display(session(4, DisplayOptions::default()))
        .await
        .expect("Display succeeds");
    let b = dispatcher
        .display(session(4, DisplayOptions::default()))
        .await
        .expect("Display succeeds");
    assert_ne!(a, b);

    let first = {
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            dispatcher.dispatch(&InputEvent::new(a, "⏭", OWNER)).await
        })
    };
    let second = {
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            dispatcher.dispatch(&InputEvent::new(b, "▶", OWNER)).await
        })
    };
    first.await.expect("Task completes");
    second.await.expect("Task completes");

    assert_eq!(dispatcher.current_index(a).await, Some(4));
    assert_eq!(dispatcher.current_index(b).await, Some(2));
}

#[tokio::test]
async fn test_events_for_one_session_apply_in_turn() {
    let (dispatcher, _transport) = dispatcher(Arc::new(AllowAll));
    let handle = dispatcher
        .display(session(10, DisplayOptions::default()))
        .await
        .expect("Display succeeds");

    let tasks: Vec<_> = (0..5)
        .map(|_| {
            let dispatcher = dispatcher.clone();
            tokio::spawn(async move {
                dispatcher
                    .dispatch(&InputEvent::new(handle, "▶", OWNER))
                    .await
            })
        })
        .collect();
    for task in tasks {
        task.await.expect("Task completes");
    }

    assert_eq!(dispatcher.current_index(handle).await, Some(6));
}

#[tokio::test]
async fn test_shutdown_disposes_every_session() {
    let (dispatcher, transport) = dispatcher(Arc::new(AllowAll));
    for _ in 0..3 {
        dispatcher
            .display(session(2, DisplayOptions::default()))
            .await
            .expect("Display succeeds");
    }
    assert_eq!(dispatcher.session_count(), 3);

    dispatcher.shutdown().await;

    assert_eq!(dispatcher.session_count(), 0);
    assert_eq!(transport.count(Op::RemoveAll), 3);
}
