//! End-to-end flows through the public surface: registry selection, wallet
//! handshake, balance display, transfer submission and receipt lookup.

use std::sync::Arc;
use wallet_session::provider::mock::{MockChainClient, MockConnector, MockWalletProvider};
use wallet_session::{
    ChainRegistry, Coin, ConnectOutcome, DeliverTxResult, Notice, SendOutcome,
    SessionOrchestrator, TransactionReceipt,
};

fn make_stack() -> (
    Arc<MockWalletProvider>,
    Arc<MockChainClient>,
    Arc<SessionOrchestrator>,
) {
    let provider = Arc::new(MockWalletProvider::with_address(
        "osmo1abcdef0123456789abcdef0123456789abcdef",
    ));
    let client = Arc::new(MockChainClient::new());
    let connector = Arc::new(MockConnector::new(client.clone()));
    let orchestrator = Arc::new(SessionOrchestrator::new(provider.clone(), connector));
    (provider, client, orchestrator)
}

// ═══════════════════════════════════════════════════════════════════════════
// SCENARIO 1: connect and display the stake-currency balance
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn connect_then_display_balance() {
    let (_provider, client, orchestrator) = make_stack();
    let registry = ChainRegistry::builtin();
    let osmosis = registry.get("osmosis-1").unwrap().clone();
    client.set_balance("uosmo", 1_000_000).await;

    let outcome = orchestrator.select_chain(osmosis.clone()).await.unwrap();
    assert!(matches!(outcome, ConnectOutcome::Connected { .. }));

    let balance = orchestrator.current_balance().await.unwrap();
    assert_eq!(balance, Coin::new(1_000_000, "uosmo"));
    assert_eq!(
        balance.display_whole(osmosis.stake_currency.coin_decimals),
        "1.00 uosmo"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SCENARIO 2: fixed transfer amount and fee from the descriptor exponent
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn send_uses_descriptor_exponent_for_amounts() {
    let (_provider, client, orchestrator) = make_stack();
    let osmosis = ChainRegistry::builtin().get("osmosis-1").unwrap().clone();
    orchestrator.select_chain(osmosis).await.unwrap();

    let outcome = orchestrator
        .send("osmo1r9ufesd4ja09g4rcxxetpx675eu09m45q05wv7")
        .await;
    assert!(outcome.is_success());

    let sent = client.sent_transfers().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].amount[0].amount.to_string(), "10000000");
    assert_eq!(sent[0].amount[0].denom, "uosmo");
    assert_eq!(sent[0].fee.gas, 200_000);
    assert_eq!(sent[0].fee.amount[0].denom, "uosmo");
    assert_eq!(sent[0].memo, "");
}

// ═══════════════════════════════════════════════════════════════════════════
// SCENARIO 3: delivered transfer, recorded hash, receipt lookup
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn delivered_transfer_resolves_to_receipt() {
    let (_provider, client, orchestrator) = make_stack();
    let osmosis = ChainRegistry::builtin().get("osmosis-1").unwrap().clone();
    orchestrator.select_chain(osmosis).await.unwrap();
    let mut notices = orchestrator.subscribe();

    client
        .set_deliver_result(DeliverTxResult {
            code: 0,
            height: 12345,
            transaction_hash: "ABCD".to_string(),
        })
        .await;
    client
        .set_receipt(
            "ABCD",
            TransactionReceipt {
                height: 12345,
                gas_used: 81_234,
                gas_wanted: 200_000,
                code: 0,
            },
        )
        .await;

    let outcome = orchestrator
        .send("osmo1r9ufesd4ja09g4rcxxetpx675eu09m45q05wv7")
        .await;
    assert_eq!(
        outcome,
        SendOutcome::Delivered {
            height: 12345,
            hash: "ABCD".to_string()
        }
    );
    assert_eq!(
        orchestrator.transfer_record().await.hash.as_deref(),
        Some("ABCD")
    );

    // the success notice carries block height and hash for the user
    let mut delivered = None;
    while let Ok(notice) = notices.try_recv() {
        if let Notice::TransferDelivered { height, hash } = notice {
            delivered = Some((height, hash));
        }
    }
    assert_eq!(delivered, Some((12345, "ABCD".to_string())));

    let receipt = orchestrator.lookup_transfer().await.unwrap();
    assert_eq!(receipt.height, 12345);
    assert_eq!(receipt.gas_used, 81_234);
    assert_eq!(receipt.gas_wanted, 200_000);
    assert_eq!(orchestrator.transfer_record().await.receipt, Some(receipt));
}

// ═══════════════════════════════════════════════════════════════════════════
// SCENARIO 4: on-chain execution failure leaves everything untouched
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn rejected_transfer_changes_nothing() {
    let (_provider, client, orchestrator) = make_stack();
    let osmosis = ChainRegistry::builtin().get("osmosis-1").unwrap().clone();
    client.set_balance("uosmo", 9_000_000).await;
    orchestrator.select_chain(osmosis).await.unwrap();
    let queries_after_connect = client.balance_query_count();
    let mut notices = orchestrator.subscribe();

    client
        .set_deliver_result(DeliverTxResult {
            code: 5,
            height: 12346,
            transaction_hash: "WONTRECORD".to_string(),
        })
        .await;

    let outcome = orchestrator
        .send("osmo1r9ufesd4ja09g4rcxxetpx675eu09m45q05wv7")
        .await;
    assert_eq!(
        outcome,
        SendOutcome::ExecutionFailed {
            code: 5,
            height: 12346
        }
    );

    assert!(orchestrator.transfer_record().await.hash.is_none());
    assert_eq!(client.balance_query_count(), queries_after_connect);
    assert_eq!(
        orchestrator.current_balance().await,
        Some(Coin::new(9_000_000, "uosmo"))
    );
    while let Ok(notice) = notices.try_recv() {
        assert!(!matches!(notice, Notice::TransferDelivered { .. }));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// FULL JOURNEY: switch networks, re-query, transfer, inspect
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn network_switch_rebinds_the_whole_session() {
    let (provider, client, orchestrator) = make_stack();
    let registry = ChainRegistry::builtin();
    let osmosis = registry.get("osmosis-1").unwrap().clone();
    let localnet = registry.get("spx-local-1").unwrap().clone();

    client.set_balance("uosmo", 1_000_000).await;
    client.set_balance("uspx", 123_450_000).await;

    orchestrator.select_chain(osmosis).await.unwrap();
    assert_eq!(
        orchestrator.current_balance().await,
        Some(Coin::new(1_000_000, "uosmo"))
    );

    // user picks the other network in the selector
    orchestrator.select_chain(localnet.clone()).await.unwrap();
    let balance = orchestrator.current_balance().await.unwrap();
    assert_eq!(balance, Coin::new(123_450_000, "uspx"));
    assert_eq!(
        balance.display_whole(localnet.stake_currency.coin_decimals),
        "123.45 uspx"
    );

    // both handshakes registered their chain with the wallet, in order
    assert_eq!(
        provider.suggested_chains().await,
        vec!["osmosis-1", "spx-local-1"]
    );

    // transfers on the second chain use its minimal denomination
    orchestrator.send("spx1recipient").await;
    let sent = client.sent_transfers().await;
    assert_eq!(sent[0].amount[0].denom, "uspx");
    assert_eq!(sent[0].amount[0].amount.to_string(), "10000000");
}
