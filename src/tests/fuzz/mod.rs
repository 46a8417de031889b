//! Fuzz tests: arbitrary method strings must never panic the matcher or
//! the dispatcher, only produce envelopes (or clean misses).

use std::sync::Arc;

use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::{json, Value};

use crate::config::RegistryConfig;
use crate::controllers::{
    AutoPrompter, Collaborators, HashDeriver, InMemPluginsController, RpcDelegate, StaticAccounts,
    StaticKeyring,
};
use crate::registry::{MethodPattern, MethodRegistry};
use crate::rpc::envelope::{EndSignal, EngineContext, MethodCall, Next, RpcRequest, RpcResponse};
use crate::rpc::{DispatchOutcome, Dispatcher};

struct NullDelegate;

#[async_trait]
impl RpcDelegate for NullDelegate {
    async fn handle_rpc_request(
        &self,
        _call: &MethodCall,
        res: &mut RpcResponse,
        _next: &mut Next,
        end: &mut EndSignal,
        _ctx: &EngineContext,
    ) {
        res.result = Some(Value::Null);
        end.done();
    }
}

fn dispatcher() -> Dispatcher {
    let collab = Collaborators {
        accounts: Arc::new(StaticAccounts::default()),
        assets: Arc::new(NullDelegate),
        plugin_accounts: Arc::new(NullDelegate),
        plugins: Arc::new(InMemPluginsController::new()),
        keyring: Arc::new(StaticKeyring::new("test seed phrase")),
        deriver: Arc::new(HashDeriver),
        prompter: Arc::new(AutoPrompter::new(true, Value::Null)),
    };
    Dispatcher::new(Arc::new(
        MethodRegistry::new(collab, &RegistryConfig::default()).unwrap(),
    ))
}

fn random_string(rng: &mut impl Rng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

#[test]
fn fuzz_pattern_matching_never_panics() {
    let mut rng = rand::thread_rng();
    let patterns = [
        MethodPattern::parse("eth_accounts").unwrap(),
        MethodPattern::parse("wallet_plugin_*").unwrap(),
        MethodPattern::parse("wallet_getBip44Entropy_*").unwrap(),
    ];

    for _ in 0..2000 {
        let len = rng.gen_range(0..64);
        let method = random_string(&mut rng, len);
        for p in &patterns {
            let _ = p.matches(&method);
        }
        // non-ASCII input is just as legal
        let _ = patterns[1].matches("wallet_plugin_例え.テスト");
    }
}

#[tokio::test]
async fn fuzz_dispatch_always_yields_an_envelope_or_a_miss() {
    let mut rng = rand::thread_rng();
    let d = dispatcher();
    let ctx = EngineContext::new("fuzz.example");

    for i in 0..500 {
        let len = rng.gen_range(0..24);
        let method = match i % 3 {
            0 => format!("wallet_plugin_{}", random_string(&mut rng, len)),
            1 => format!("wallet_getBip44Entropy_{}", random_string(&mut rng, len)),
            _ => random_string(&mut rng, len),
        };

        let params = vec![json!(random_string(&mut rng, 8))];
        match d.dispatch(RpcRequest::new(method.clone(), params), &ctx).await {
            DispatchOutcome::Completed(res) => {
                assert!(res.is_settled(), "{method}: envelope must settle exactly one side");
            }
            DispatchOutcome::Unresolved => panic!("{method}: registry handlers always End"),
        }
    }
}
