//! Integration tests: build the full registry over reference
//! collaborators and drive it through the dispatcher.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};

use crate::config::RegistryConfig;
use crate::controllers::{
    AutoPrompter, Collaborators, HashDeriver, InMemPluginsController, KeyDerivation,
    PluginRpcHandler, PluginsController, RpcDelegate, StaticAccounts, StaticKeyring,
};
use crate::registry::MethodRegistry;
use crate::rpc::envelope::{EndSignal, EngineContext, MethodCall, Next, RpcRequest, RpcResponse};
use crate::rpc::errors::{codes, RpcError};
use crate::rpc::{DispatchOutcome, Dispatcher};
use crate::utils::metrics::{DISPATCH_TOTAL, METRICS};

struct NullDelegate;

#[async_trait]
impl RpcDelegate for NullDelegate {
    async fn handle_rpc_request(
        &self,
        call: &MethodCall,
        res: &mut RpcResponse,
        _next: &mut Next,
        end: &mut EndSignal,
        _ctx: &EngineContext,
    ) {
        res.result = Some(json!({ "delegated": call.method }));
        end.done();
    }
}

struct EchoPlugin;

#[async_trait]
impl PluginRpcHandler for EchoPlugin {
    async fn handle(&self, requestor: &str, payload: Value) -> Result<Value, RpcError> {
        Ok(json!({ "from": requestor, "payload": payload }))
    }
}

struct Fixture {
    dispatcher: Dispatcher,
    plugins: Arc<InMemPluginsController>,
    prompter: Arc<AutoPrompter>,
}

fn fixture(confirm_answer: bool) -> Fixture {
    crate::utils::init_logging();
    let plugins = Arc::new(InMemPluginsController::new());
    let prompter = Arc::new(AutoPrompter::new(confirm_answer, Value::Null));
    let collab = Collaborators {
        accounts: Arc::new(StaticAccounts::new(vec!["0xABC".into()])),
        assets: Arc::new(NullDelegate),
        plugin_accounts: Arc::new(NullDelegate),
        plugins: plugins.clone(),
        keyring: Arc::new(StaticKeyring::new("test seed phrase")),
        deriver: Arc::new(HashDeriver),
        prompter: prompter.clone(),
    };
    let registry = MethodRegistry::new(collab, &RegistryConfig::default()).unwrap();
    Fixture {
        dispatcher: Dispatcher::new(Arc::new(registry)),
        plugins,
        prompter,
    }
}

fn ctx() -> EngineContext {
    EngineContext::new("dapp.example")
}

async fn completed(f: &Fixture, method: &str, params: Vec<Value>) -> RpcResponse {
    let outcome = f.dispatcher.dispatch(RpcRequest::new(method, params), &ctx()).await;
    match outcome {
        DispatchOutcome::Completed(res) => {
            // envelope discipline holds for every completed dispatch
            assert!(res.is_settled(), "{method}: envelope must settle exactly one side");
            res
        }
        DispatchOutcome::Unresolved => panic!("{method}: dispatch left unresolved"),
    }
}

#[tokio::test]
async fn scenario_a_account_listing() {
    let f = fixture(true);
    let res = completed(&f, "eth_accounts", vec![]).await;
    assert_eq!(res.result, Some(json!(["0xABC"])));
    assert!(res.error.is_none());
}

#[tokio::test]
async fn scenario_b_bip44_entropy_for_coin_type_60() {
    let f = fixture(true);
    let res = completed(&f, "wallet_getBip44Entropy_60", vec![]).await;

    let expected = HashDeriver
        .derive_from_path("bip39:test seed phrase/bip32:44'/bip32:60'")
        .await
        .unwrap();
    assert_eq!(res.result, Some(Value::String(BASE64.encode(expected))));
}

#[tokio::test]
async fn scenario_c_plugin_installed_but_handlerless() {
    let f = fixture(true);
    let res = completed(&f, "wallet_plugin_example.com", vec![json!("ping")]).await;

    let err = res.error.expect("error expected");
    assert_eq!(err.code(), codes::METHOD_NOT_FOUND);
    assert_eq!(err.data(), Some(Value::String("wallet_plugin_example.com".into())));
    // the install itself still happened inside the same dispatch
    assert_eq!(f.plugins.install_count(), 1);
    assert!(f.plugins.get("example.com").await.is_some());
}

#[tokio::test]
async fn scenario_d_unknown_method_touches_no_collaborator() {
    let f = fixture(true);
    let res = completed(&f, "unknown_method", vec![]).await;

    let err = res.error.expect("error expected");
    assert_eq!(err.code(), codes::METHOD_NOT_FOUND);
    assert_eq!(err.data(), Some(Value::String("unknown_method".into())));
    assert_eq!(f.plugins.install_count(), 0);
    assert!(f.prompter.shown().is_empty());
}

#[tokio::test]
async fn plugin_forwarding_after_install() {
    let f = fixture(true);
    f.plugins.register_rpc_handler("example.com", Arc::new(EchoPlugin)).await;

    let res = completed(&f, "wallet_plugin_example.com", vec![json!("ping")]).await;
    assert_eq!(res.result, Some(json!({ "from": "dapp.example", "payload": "ping" })));
    assert_eq!(f.plugins.install_count(), 1);
}

#[tokio::test]
async fn sequential_plugin_calls_install_once() {
    let f = fixture(true);
    f.plugins.register_rpc_handler("example.com", Arc::new(EchoPlugin)).await;

    let first = completed(&f, "wallet_plugin_example.com", vec![json!(1)]).await;
    let second = completed(&f, "wallet_plugin_example.com", vec![json!(2)]).await;

    assert!(first.result.is_some());
    assert!(second.result.is_some());
    assert_eq!(f.plugins.install_count(), 1);
}

#[tokio::test]
async fn concurrent_plugin_calls_converge_on_one_install() {
    let f = fixture(true);
    f.plugins.register_rpc_handler("example.com", Arc::new(EchoPlugin)).await;

    let ctx_a = ctx();
    let ctx_b = ctx();
    let (a, b) = tokio::join!(
        f.dispatcher.dispatch(RpcRequest::new("wallet_plugin_example.com", vec![json!("a")]), &ctx_a),
        f.dispatcher.dispatch(RpcRequest::new("wallet_plugin_example.com", vec![json!("b")]), &ctx_b),
    );

    for outcome in [a, b] {
        let res = outcome.into_response().expect("completed");
        assert!(res.result.is_some());
        assert!(res.error.is_none());
    }
    assert_eq!(f.plugins.install_count(), 1);
}

#[tokio::test]
async fn delegated_methods_reach_their_collaborator() {
    let f = fixture(true);
    let res = completed(&f, "wallet_manageAssets", vec![]).await;
    assert_eq!(res.result, Some(json!({ "delegated": "wallet_manageAssets" })));

    let res = completed(&f, "wallet_manageIdentities", vec![]).await;
    assert_eq!(res.result, Some(json!({ "delegated": "wallet_manageIdentities" })));
}

#[tokio::test]
async fn prompt_methods_round_trip_the_user() {
    let f = fixture(false);

    let res = completed(&f, "alert", vec![json!("notice text")]).await;
    assert_eq!(res.result, Some(json!(true)));

    let res = completed(&f, "confirm", vec![json!("approve?")]).await;
    assert_eq!(res.result, Some(json!(false)));

    let res = completed(&f, "customPrompt", vec![json!("payload")]).await;
    assert_eq!(res.result, Some(json!(true)));

    let shown = f.prompter.shown();
    assert_eq!(shown.len(), 3);
    assert!(shown[0].contains("dapp.example"));
}

#[tokio::test]
async fn empty_wildcard_suffix_is_dispatched_not_rejected_up_front() {
    let f = fixture(true);
    // empty coin type: matched, then fails numeric validation in-handler
    let res = completed(&f, "wallet_getBip44Entropy_", vec![]).await;
    assert!(matches!(res.error, Some(RpcError::InvalidParams(_))));
}

#[tokio::test]
async fn coin_type_allowlist_gates_derivation() {
    let plugins = Arc::new(InMemPluginsController::new());
    let collab = Collaborators {
        accounts: Arc::new(StaticAccounts::default()),
        assets: Arc::new(NullDelegate),
        plugin_accounts: Arc::new(NullDelegate),
        plugins,
        keyring: Arc::new(StaticKeyring::new("test seed phrase")),
        deriver: Arc::new(HashDeriver),
        prompter: Arc::new(AutoPrompter::new(true, Value::Null)),
    };
    let cfg = RegistryConfig {
        allowed_coin_types: Some(vec![0]),
        ..RegistryConfig::default()
    };
    let dispatcher = Dispatcher::new(Arc::new(MethodRegistry::new(collab, &cfg).unwrap()));

    let denied = dispatcher
        .dispatch(RpcRequest::new("wallet_getBip44Entropy_60", vec![]), &ctx())
        .await
        .into_response()
        .unwrap();
    assert!(matches!(denied.error, Some(RpcError::InvalidParams(_))));

    let allowed = dispatcher
        .dispatch(RpcRequest::new("wallet_getBip44Entropy_0", vec![]), &ctx())
        .await
        .into_response()
        .unwrap();
    assert!(allowed.result.is_some());
}

#[tokio::test]
async fn dispatch_total_counter_advances() {
    let f = fixture(true);
    let before = METRICS.get(DISPATCH_TOTAL);
    completed(&f, "eth_accounts", vec![]).await;
    assert!(METRICS.get(DISPATCH_TOTAL) >= before + 1);
}

#[test]
fn ui_description_table_covers_the_method_set() {
    let f = fixture(true);
    let descriptions = f.dispatcher.registry().descriptions();
    for pattern in ["eth_accounts", "alert", "wallet_getBip44Entropy_*", "wallet_plugin_*"] {
        assert!(descriptions.contains_key(pattern), "missing {pattern}");
    }
    assert_eq!(descriptions.len(), f.dispatcher.registry().entries().len());
    // the internal-capability table is served alongside the external one
    assert_eq!(
        crate::registry::internal_method_description("getPluginState"),
        Some("Get data stored locally")
    );
}
