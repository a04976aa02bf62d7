use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Emitted once when the contract is initialized.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
}

/// Emitted when a treatment group is registered.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupCreatedEvent {
    pub group_id: String,
    pub name: String,
    pub max_patients: u32,
}

/// Emitted when a patient is enrolled into an explicitly chosen group.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientAssignedEvent {
    pub patient_id: String,
    pub group_id: String,
}

/// Emitted when a patient is enrolled via the selector.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRandomizedEvent {
    pub patient_id: String,
    pub group_id: String,
    pub candidate_count: u32,
}

/// Emitted when trial-admin rights move to a new address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferredEvent {
    pub previous_admin: Address,
    pub new_admin: Address,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    env.events().publish(topics, InitializedEvent { admin });
}

pub fn publish_group_created(env: &Env, group_id: String, name: String, max_patients: u32) {
    let topics = (symbol_short!("GRP_CRT"), group_id.clone());
    env.events().publish(
        topics,
        GroupCreatedEvent {
            group_id,
            name,
            max_patients,
        },
    );
}

pub fn publish_patient_assigned(env: &Env, patient_id: String, group_id: String) {
    let topics = (symbol_short!("PAT_ASG"), patient_id.clone());
    env.events().publish(
        topics,
        PatientAssignedEvent {
            patient_id,
            group_id,
        },
    );
}

pub fn publish_patient_randomized(
    env: &Env,
    patient_id: String,
    group_id: String,
    candidate_count: u32,
) {
    let topics = (symbol_short!("PAT_RND"), patient_id.clone());
    env.events().publish(
        topics,
        PatientRandomizedEvent {
            patient_id,
            group_id,
            candidate_count,
        },
    );
}

pub fn publish_admin_transferred(env: &Env, previous_admin: Address, new_admin: Address) {
    let topics = (symbol_short!("ADM_SET"),);
    env.events().publish(
        topics,
        AdminTransferredEvent {
            previous_admin,
            new_admin,
        },
    );
}
