#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec, Address, Env, String as ContractString};
use treatment_randomization::{
    TreatmentRandomizationContract, TreatmentRandomizationContractClient,
};

#[derive(Arbitrary, Debug)]
enum Op {
    CreateGroup { group: u8, capacity: u8 },
    Assign { patient: u8, group: u8 },
    Randomize { patient: u8, first: u8, second: u8 },
    AdvanceClock { delta: u16 },
}

// Drive arbitrary admin call sequences and check that the enrollment
// invariants survive every interleaving of successes and failures.
fuzz_target!(|ops: Vec<Op>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(TreatmentRandomizationContract, ());
    let client = TreatmentRandomizationContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    let mut now: u64 = 1_700_000_000;
    env.ledger().with_mut(|li| li.timestamp = now);

    let mut created: Vec<String> = Vec::new();
    let mut assigned: BTreeMap<String, ContractString> = BTreeMap::new();

    for op in &ops {
        match op {
            Op::CreateGroup { group, capacity } => {
                let gid = format!("G{}", group % 4);
                let result = client.try_create_treatment_group(
                    &admin,
                    &ContractString::from_str(&env, &gid),
                    &ContractString::from_str(&env, "Arm"),
                    &ContractString::from_str(&env, "fuzzed arm"),
                    &u32::from(capacity % 4),
                );
                if matches!(result, Ok(_)) && !created.contains(&gid) {
                    created.push(gid);
                }
            }
            Op::Assign { patient, group } => {
                let pid = format!("PT{}", patient % 8);
                let gid = format!("G{}", group % 4);
                let _ = client.try_assign_patient(
                    &admin,
                    &ContractString::from_str(&env, &pid),
                    &ContractString::from_str(&env, &gid),
                );
            }
            Op::Randomize {
                patient,
                first,
                second,
            } => {
                let pid = format!("PT{}", patient % 8);
                let candidates = vec![
                    &env,
                    ContractString::from_str(&env, &format!("G{}", first % 4)),
                    ContractString::from_str(&env, &format!("G{}", second % 4)),
                ];
                let _ = client.try_randomize_patient(
                    &admin,
                    &ContractString::from_str(&env, &pid),
                    &candidates,
                );
            }
            Op::AdvanceClock { delta } => {
                now += u64::from(*delta);
                env.ledger().with_mut(|li| li.timestamp = now);
            }
        }

        for gid in &created {
            let group = client
                .get_treatment_group(&ContractString::from_str(&env, gid))
                .unwrap();
            assert!(group.current_count <= group.max_patients);
        }

        for i in 0..8u8 {
            let pid = format!("PT{}", i);
            if let Some(assignment) =
                client.get_patient_assignment(&ContractString::from_str(&env, &pid))
            {
                match assigned.get(&pid) {
                    Some(previous) => assert_eq!(previous, &assignment.group_id),
                    None => {
                        assigned.insert(pid, assignment.group_id);
                    }
                }
            }
        }
    }
});
