//! Account creation on native bridges.

use cosmwasm_std::{coins, to_json_binary, Addr, CosmosMsg, Uint128, WasmMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use common::governor::{
    ExecuteMsg as GovernorExecuteMsg, InstantiateMsg as GovernorInstantiateMsg,
};
use xchain_door::msg::{
    AccountCreatedResponse, BridgeParams, CreateAccountRequestResponse, ExecuteMsg,
    InstantiateMsg, Issue, QueryMsg, XChainBridge,
};

const DENOM: &str = "uxrp";
const OWNER: &str = "owner";
const ALICE: &str = "alice";
const DAVE: &str = "dave";
const ISSUING_DOOR: &str = "r_issuing_door";

fn contract_door() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        xchain_door::contract::execute,
        xchain_door::contract::instantiate,
        xchain_door::contract::query,
    )
    .with_reply(xchain_door::contract::reply);
    Box::new(contract)
}

fn contract_governor() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        governor::contract::execute,
        governor::contract::instantiate,
        governor::contract::query,
    );
    Box::new(contract)
}

/// Returns (app, governor, door, bridge) with threshold 2 of 3 witnesses,
/// min create amount 5 and signature reward 100.
fn setup() -> (App, Addr, Addr, XChainBridge) {
    let mut app = App::default();
    let owner = Addr::unchecked(OWNER);

    app.init_modules(|router, _, storage| {
        for account in [OWNER, ALICE] {
            router
                .bank
                .init_balance(storage, &Addr::unchecked(account), coins(10_000_000, DENOM))
                .unwrap();
        }
    });

    let governor_code = app.store_code(contract_governor());
    let door_code = app.store_code(contract_door());

    let governor = app
        .instantiate_contract(
            governor_code,
            owner.clone(),
            &GovernorInstantiateMsg {
                admin: OWNER.to_string(),
                witnesses: vec![
                    "witness1".to_string(),
                    "witness2".to_string(),
                    "witness3".to_string(),
                ],
                threshold: 2,
            },
            &[],
            "governor",
            None,
        )
        .unwrap();

    let door = app
        .instantiate_contract(
            door_code,
            owner.clone(),
            &InstantiateMsg {
                governor: governor.to_string(),
                native_denom: DENOM.to_string(),
                native_issuing_door: ISSUING_DOOR.to_string(),
                wrapped_token_code_id: 0,
                min_create_bridge_reward: Uint128::new(100),
            },
            &[],
            "xchain-door",
            Some(governor.to_string()),
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        governor.clone(),
        &GovernorExecuteMsg::EnableModule {
            module: door.to_string(),
        },
        &[],
    )
    .unwrap();
    app.send_tokens(owner.clone(), governor.clone(), &coins(1_000_000, DENOM))
        .unwrap();

    let bridge = XChainBridge {
        locking_door: door.to_string(),
        locking_issue: Issue::native("XRP"),
        issuing_door: ISSUING_DOOR.to_string(),
        issuing_issue: Issue::native("XRP"),
    };
    let create = ExecuteMsg::CreateBridge {
        bridge: bridge.clone(),
        params: BridgeParams {
            min_create_amount: Uint128::new(5),
            signature_reward: Uint128::new(100),
        },
    };
    app.execute_contract(
        owner,
        governor.clone(),
        &GovernorExecuteMsg::Execute {
            msgs: vec![CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: door.to_string(),
                msg: to_json_binary(&create).unwrap(),
                funds: vec![],
            })],
        },
        &[],
    )
    .unwrap();

    (app, governor, door, bridge)
}

fn attest(
    app: &mut App,
    door: &Addr,
    bridge: &XChainBridge,
    witness: &str,
    amount: u128,
    nonce: u64,
) -> Result<AppResponse, String> {
    app.execute_contract(
        Addr::unchecked(witness),
        door.clone(),
        &ExecuteMsg::AddCreateAccountAttestation {
            bridge: bridge.clone(),
            destination: DAVE.to_string(),
            amount: Uint128::new(amount),
            nonce,
        },
        &[],
    )
    .map_err(|e| e.root_cause().to_string())
}

fn commit(
    app: &mut App,
    door: &Addr,
    bridge: &XChainBridge,
    amount: u128,
    reward: u128,
    funds: u128,
) -> Result<AppResponse, String> {
    app.execute_contract(
        Addr::unchecked(ALICE),
        door.clone(),
        &ExecuteMsg::CreateAccountCommit {
            bridge: bridge.clone(),
            destination: "r_new_account".to_string(),
            amount: Uint128::new(amount),
            reward: Uint128::new(reward),
        },
        &coins(funds, DENOM),
    )
    .map_err(|e| e.root_cause().to_string())
}

fn balance(app: &App, account: &str) -> u128 {
    app.wrap().query_balance(account, DENOM).unwrap().amount.u128()
}

fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == format!("wasm-{}", ty))
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

// ============================================================================
// Committing Side
// ============================================================================

#[test]
fn test_create_account_commit_escrows_and_counts() {
    let (mut app, governor, door, bridge) = setup();
    let before = balance(&app, governor.as_str());

    let res = commit(&mut app, &door, &bridge, 5, 100, 105).unwrap();
    assert_eq!(
        event_attr(&res, "create_account_commit", "create_count"),
        Some("1".to_string())
    );
    assert_eq!(
        event_attr(&res, "create_account_commit", "destination"),
        Some("r_new_account".to_string())
    );

    // Overpaying is accepted and escrowed in full
    let res = commit(&mut app, &door, &bridge, 5, 100, 200).unwrap();
    assert_eq!(
        event_attr(&res, "create_account_commit", "create_count"),
        Some("2".to_string())
    );
    assert_eq!(balance(&app, governor.as_str()), before + 305);
}

#[test]
fn test_create_account_commit_shortfalls() {
    let (mut app, _, door, bridge) = setup();

    let err = commit(&mut app, &door, &bridge, 4, 100, 104).unwrap_err();
    assert_eq!(err, "Insufficient create amount: required 5, got 4");

    let err = commit(&mut app, &door, &bridge, 5, 99, 104).unwrap_err();
    assert_eq!(err, "Insufficient signature reward: required 100, got 99");

    let err = commit(&mut app, &door, &bridge, 5, 100, 104).unwrap_err();
    assert_eq!(err, "Insufficient amount sent: expected 105, got 104");
}

// ============================================================================
// Receiving Side
// ============================================================================

#[test]
fn test_majority_amount_creates_account() {
    let (mut app, _, door, bridge) = setup();

    attest(&mut app, &door, &bridge, "witness1", 5, 1).unwrap();
    attest(&mut app, &door, &bridge, "witness3", 7, 1).unwrap();
    assert_eq!(balance(&app, DAVE), 0);

    let request: CreateAccountRequestResponse = app
        .wrap()
        .query_wasm_smart(
            &door,
            &QueryMsg::CreateAccountRequest {
                bridge: bridge.clone(),
                destination: DAVE.to_string(),
            },
        )
        .unwrap();
    assert_eq!(request.reward, Uint128::new(100));
    assert_eq!(request.attestations.len(), 2);
    assert_eq!(request.attestations[0].vote.nonce, 1);

    let res = attest(&mut app, &door, &bridge, "witness2", 5, 1).unwrap();
    assert_eq!(
        event_attr(&res, "create_account", "amount"),
        Some("5".to_string())
    );
    assert_eq!(
        event_attr(&res, "credit", "destination"),
        Some(DAVE.to_string())
    );

    assert_eq!(balance(&app, DAVE), 5);
    assert_eq!(balance(&app, "witness1"), 50);
    assert_eq!(balance(&app, "witness2"), 50);
    assert_eq!(balance(&app, "witness3"), 0);

    let created: AccountCreatedResponse = app
        .wrap()
        .query_wasm_smart(
            &door,
            &QueryMsg::AccountCreated {
                bridge,
                destination: DAVE.to_string(),
            },
        )
        .unwrap();
    assert!(created.created);
    assert_eq!(created.nonce, Some(1));
}

#[test]
fn test_created_account_is_never_reopened() {
    let (mut app, _, door, bridge) = setup();

    attest(&mut app, &door, &bridge, "witness1", 5, 1).unwrap();
    attest(&mut app, &door, &bridge, "witness2", 5, 1).unwrap();
    assert_eq!(balance(&app, DAVE), 5);

    let err = attest(&mut app, &door, &bridge, "witness3", 5, 1).unwrap_err();
    assert_eq!(err, "Account already created: dave");

    let err = attest(&mut app, &door, &bridge, "witness1", 9, 2).unwrap_err();
    assert_eq!(err, "Account already created: dave");
    assert_eq!(balance(&app, DAVE), 5);
}

#[test]
fn test_wrong_nonce_cannot_block_creation() {
    let (mut app, _, door, bridge) = setup();

    attest(&mut app, &door, &bridge, "witness1", 5, 99).unwrap();
    attest(&mut app, &door, &bridge, "witness2", 5, 1).unwrap();
    assert_eq!(balance(&app, DAVE), 0);

    let res = attest(&mut app, &door, &bridge, "witness3", 5, 1).unwrap();
    assert_eq!(
        event_attr(&res, "create_account", "nonce"),
        Some("1".to_string())
    );
    assert_eq!(balance(&app, DAVE), 5);
    assert_eq!(balance(&app, "witness1"), 0);
    assert_eq!(balance(&app, "witness2"), 50);
    assert_eq!(balance(&app, "witness3"), 50);

    let created: AccountCreatedResponse = app
        .wrap()
        .query_wasm_smart(
            &door,
            &QueryMsg::AccountCreated {
                bridge,
                destination: DAVE.to_string(),
            },
        )
        .unwrap();
    assert_eq!(created.nonce, Some(1));
}

#[test]
fn test_witness_can_correct_its_nonce() {
    let (mut app, _, door, bridge) = setup();

    attest(&mut app, &door, &bridge, "witness1", 5, 99).unwrap();
    attest(&mut app, &door, &bridge, "witness2", 5, 1).unwrap();
    attest(&mut app, &door, &bridge, "witness1", 5, 1).unwrap();

    assert_eq!(balance(&app, DAVE), 5);
    assert_eq!(balance(&app, "witness1"), 50);
    assert_eq!(balance(&app, "witness2"), 50);
}

#[test]
fn test_changed_amount_replaces_earlier_vote() {
    let (mut app, _, door, bridge) = setup();

    attest(&mut app, &door, &bridge, "witness1", 7, 1).unwrap();
    attest(&mut app, &door, &bridge, "witness1", 5, 1).unwrap();

    // witness1 no longer backs 7, so this is still one vote short
    let res = attest(&mut app, &door, &bridge, "witness3", 7, 1).unwrap();
    assert_eq!(event_attr(&res, "create_account", "amount"), None);
    assert_eq!(balance(&app, DAVE), 0);

    let request: CreateAccountRequestResponse = app
        .wrap()
        .query_wasm_smart(
            &door,
            &QueryMsg::CreateAccountRequest {
                bridge: bridge.clone(),
                destination: DAVE.to_string(),
            },
        )
        .unwrap();
    assert_eq!(request.attestations.len(), 2);
    assert_eq!(request.attestations[0].witness, Addr::unchecked("witness1"));
    assert_eq!(request.attestations[0].vote.amount, Uint128::new(5));

    let res = attest(&mut app, &door, &bridge, "witness2", 5, 1).unwrap();
    assert_eq!(
        event_attr(&res, "create_account", "amount"),
        Some("5".to_string())
    );
    assert_eq!(balance(&app, DAVE), 5);
    assert_eq!(balance(&app, "witness1"), 50);
    assert_eq!(balance(&app, "witness2"), 50);
    assert_eq!(balance(&app, "witness3"), 0);
}

#[test]
fn test_attestation_guards() {
    let (mut app, _, door, bridge) = setup();

    let err = attest(&mut app, &door, &bridge, ALICE, 5, 1).unwrap_err();
    assert_eq!(err, "Unauthorized: caller is not a witness");

    // Below the minimum is rejected before it becomes a vote
    let err = attest(&mut app, &door, &bridge, "witness1", 4, 1).unwrap_err();
    assert_eq!(err, "Insufficient create amount: required 5, got 4");

    let res: Result<CreateAccountRequestResponse, _> = app.wrap().query_wasm_smart(
        &door,
        &QueryMsg::CreateAccountRequest {
            bridge,
            destination: DAVE.to_string(),
        },
    );
    assert!(res.is_err());
}
