use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- Initialization ---

#[test]
fn init_sets_state() {
    let contract = new_contract(105);
    assert_eq!(contract.get_cap(), 105);
    assert_eq!(contract.total_supply(), 0);
    assert_eq!(contract.base_uri(), BASE_URI);
    assert_eq!(contract.get_owner(), &owner());
}

#[test]
#[should_panic(expected = "Base URI cannot be empty")]
fn init_empty_base_uri_panics() {
    testing_env!(context(owner()).build());
    Contract::new(owner(), String::new(), 10);
}

#[test]
#[should_panic(expected = "trailing slash")]
fn init_base_uri_without_slash_panics() {
    testing_env!(context(owner()).build());
    Contract::new(owner(), "https://nftrees.example/api/token".to_string(), 10);
}

#[test]
#[should_panic(expected = "Cap cannot exceed the ceiling")]
fn init_cap_beyond_ceiling_panics() {
    testing_env!(context(owner()).build());
    Contract::new(owner(), BASE_URI.to_string(), MAX_CAP + 1);
}

// --- set_cap ---

#[test]
fn owner_can_set_cap() {
    let mut contract = new_contract(10);
    testing_env!(context(owner()).build());

    contract.set_cap(105).unwrap();
    assert_eq!(contract.get_cap(), 105);

    contract.set_cap(210).unwrap();
    assert_eq!(contract.get_cap(), 210);
}

#[test]
fn set_cap_accepts_full_range() {
    let mut contract = new_contract(10);
    testing_env!(context(owner()).build());

    contract.set_cap(0).unwrap();
    assert_eq!(contract.get_cap(), 0);

    contract.set_cap(MAX_CAP).unwrap();
    assert_eq!(contract.get_cap(), MAX_CAP);
}

#[test]
fn set_cap_beyond_ceiling_fails() {
    let mut contract = new_contract(10);
    testing_env!(context(owner()).build());

    let err = contract.set_cap(MAX_CAP + 1).unwrap_err();
    assert!(matches!(err, NftreesError::CapExceedsCeiling(_)));
    assert_eq!(contract.get_cap(), 10, "cap must be unchanged after rejection");
}

#[test]
fn set_cap_by_non_owner_fails() {
    let mut contract = new_contract(10);
    testing_env!(context(buyer()).build());

    let err = contract.set_cap(100).unwrap_err();
    assert!(matches!(err, NftreesError::Unauthorized(_)));
    assert_eq!(contract.get_cap(), 10);
}

#[test]
fn set_cap_below_supply_blocks_minting_until_raised() {
    let mut contract = new_contract(10);
    buy_as(&mut contract, buyer()).unwrap();
    buy_as(&mut contract, buyer()).unwrap();
    buy_as(&mut contract, buyer()).unwrap();

    testing_env!(context(owner()).build());
    contract.set_cap(1).unwrap();
    assert_eq!(contract.total_supply(), 3, "minted tokens survive a cap cut");

    let err = buy_as(&mut contract, buyer()).unwrap_err();
    assert!(matches!(err, NftreesError::CapReached(_)));

    testing_env!(context(owner()).build());
    contract.set_cap(5).unwrap();
    buy_as(&mut contract, buyer()).unwrap();
    assert_eq!(contract.total_supply(), 4);
}

// --- transfer_ownership ---

#[test]
fn transfer_ownership_requires_one_yocto() {
    let mut contract = new_contract(10);
    testing_env!(context(owner()).build());

    let err = contract.transfer_ownership(buyer()).unwrap_err();
    assert!(matches!(err, NftreesError::InvalidInput(_)));
}

#[test]
fn transfer_ownership_rejects_same_owner() {
    let mut contract = new_contract(10);
    testing_env!(context_with_deposit(owner(), 1).build());

    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, NftreesError::InvalidInput(_)));
}

#[test]
fn transfer_ownership_moves_cap_authority() {
    let mut contract = new_contract(10);
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(other()).unwrap();
    assert_eq!(contract.get_owner(), &other());

    // Old owner is now just another account.
    testing_env!(context(owner()).build());
    let err = contract.set_cap(42).unwrap_err();
    assert!(matches!(err, NftreesError::Unauthorized(_)));

    testing_env!(context(other()).build());
    contract.set_cap(42).unwrap();
    assert_eq!(contract.get_cap(), 42);
}
