use application::chat_service::{ChatService, LoopState, TurnOutcome};
use domain::prompt::compose_system_prompt;
use domain::session::{Message, Role};
use shared::error::ApiError;
use tests::{asha, StubClient};

#[tokio::test]
async fn emi_question_scenario() {
    let stub = StubClient::replying(&["Your EMI is ₹23,000."]);
    let system_prompt = compose_system_prompt(&asha());
    let mut service = ChatService::new(&stub, system_prompt.clone());

    let outcome = service.handle_line("Tell me about the EMI").await.unwrap();

    assert_eq!(outcome, TurnOutcome::Reply("Your EMI is ₹23,000.".into()));
    assert_eq!(
        service.history(),
        &[
            Message::system(system_prompt.clone()),
            Message::user("Tell me about the EMI"),
            Message::assistant("Your EMI is ₹23,000."),
        ]
    );

    let sent = stub.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        vec![Message::system(system_prompt), Message::user("Tell me about the EMI")]
    );
}

#[tokio::test]
async fn exit_keyword_never_reaches_the_client() {
    for keyword in ["quit", "QUIT", "Quit", "  qUiT  "] {
        let stub = StubClient::replying(&["unused"]);
        let mut service = ChatService::new(&stub, "ctx");

        assert_eq!(service.handle_line(keyword).await.unwrap(), TurnOutcome::Exit);
        assert_eq!(service.state(), LoopState::Terminated);
        assert_eq!(stub.call_count(), 0, "{:?} triggered a completion", keyword);
        assert_eq!(service.history().len(), 1);
    }
}

#[tokio::test]
async fn failed_turn_leaves_history_and_state_alone() {
    let stub = StubClient::new(vec![
        Ok("Namaste Asha! Kya aap offer ke baare mein jaanna chahengi?".into()),
        Err(ApiError::Network("connection reset".into())),
        Ok("Processing fee ₹2,500 hai. Aur kuch?".into()),
    ]);
    let mut service = ChatService::new(&stub, "ctx");

    service.handle_line("Hi").await.unwrap();
    let before = service.history().to_vec();

    let err = service.handle_line("What is the processing fee?").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(service.history(), before.as_slice());
    assert_eq!(service.state(), LoopState::Running);

    // The operator retries and the turn goes through.
    let outcome = service.handle_line("What is the processing fee?").await.unwrap();
    assert!(matches!(outcome, TurnOutcome::Reply(_)));
    assert_eq!(service.history().len(), 5);
    assert_eq!(stub.call_count(), 3);
}

#[tokio::test]
async fn history_grows_by_two_per_turn_with_system_first() {
    let replies: Vec<String> = (0..6).map(|i| format!("reply {}", i)).collect();
    let stub = StubClient::new(replies.into_iter().map(Ok).collect());
    let mut service = ChatService::new(&stub, "ctx");

    for n in 1..=6 {
        service.handle_line(&format!("question {}", n)).await.unwrap();
        let history = service.history();
        assert_eq!(history.len(), 2 * n + 1);
        assert_eq!(history[0], Message::system("ctx"));
        assert_eq!(history[history.len() - 2].role, Role::User);
        assert_eq!(history[history.len() - 1].role, Role::Assistant);
    }

    // Each request carried the whole conversation so far.
    for (i, request) in stub.requests().iter().enumerate() {
        assert_eq!(request.len(), 2 * i + 2);
        assert_eq!(request[0].role, Role::System);
    }
    assert_eq!(service.summary().interactions, 6);
}

#[tokio::test]
async fn blank_lines_are_ignored() {
    let stub = StubClient::replying(&["hello"]);
    let mut service = ChatService::new(&stub, "ctx");

    assert_eq!(service.handle_line("").await.unwrap(), TurnOutcome::Skipped);
    assert_eq!(service.handle_line(" \t ").await.unwrap(), TurnOutcome::Skipped);
    assert_eq!(stub.call_count(), 0);
    assert_eq!(service.state(), LoopState::Running);
}
