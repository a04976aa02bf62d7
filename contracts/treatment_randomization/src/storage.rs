use soroban_sdk::{Env, String};

use crate::{DataKey, PatientAssignment, TreatmentGroup};

// ── Rent management ─────────────────────────────────────────────────────────

// Persistent entries are extended on every touch so active trial records do
// not expire from the ledger mid-enrollment.
const TTL_THRESHOLD: u32 = 5_184_000; // ~60 days
const TTL_EXTEND_TO: u32 = 10_368_000; // ~120 days

fn extend_entry_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Group records ───────────────────────────────────────────────────────────

/// Persist a group record.
pub fn put_group(env: &Env, group_id: &String, group: &TreatmentGroup) {
    let key = DataKey::Group(group_id.clone());
    env.storage().persistent().set(&key, group);
    extend_entry_ttl(env, &key);
}

/// Retrieve a group record, returning `None` when not found.
pub fn get_group(env: &Env, group_id: &String) -> Option<TreatmentGroup> {
    let key = DataKey::Group(group_id.clone());
    let group = env.storage().persistent().get(&key);
    if group.is_some() {
        extend_entry_ttl(env, &key);
    }
    group
}

// ── Assignment records ──────────────────────────────────────────────────────

/// Persist an assignment record.
///
/// Written once per patient; callers check for an existing record first.
pub fn put_assignment(env: &Env, patient_id: &String, assignment: &PatientAssignment) {
    let key = DataKey::Assignment(patient_id.clone());
    env.storage().persistent().set(&key, assignment);
    extend_entry_ttl(env, &key);
}

/// Retrieve a patient's assignment, returning `None` when unassigned.
pub fn get_assignment(env: &Env, patient_id: &String) -> Option<PatientAssignment> {
    let key = DataKey::Assignment(patient_id.clone());
    let assignment = env.storage().persistent().get(&key);
    if assignment.is_some() {
        extend_entry_ttl(env, &key);
    }
    assignment
}
