#![no_std]

pub mod events;
pub mod randomness;

mod storage;
mod validation;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol, Vec,
};

/// Instance storage keys for contract-wide scalars
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// A treatment arm with a hard enrollment cap
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreatmentGroup {
    pub name: String,
    pub description: String,
    pub max_patients: u32,
    pub current_count: u32,
}

/// The permanent binding of a patient to a treatment group.
/// Written once per patient, never updated or removed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientAssignment {
    pub group_id: String,
}

/// Persistent storage keys.
///
/// Group and assignment entries live in separate variants so a patient
/// identifier can never address a group record, and vice versa.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Group(String),
    Assignment(String),
}

/// Contract errors
///
/// Domain errors carry their wire code as the discriminant; the codes are
/// part of the contract ABI and must not be renumbered.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    BadRequest = 400,
    Unauthorized = 403,
    NotFound = 404,
    Conflict = 409,
    GroupFull = 507,
}

#[contract]
pub struct TreatmentRandomizationContract;

#[contractimpl]
impl TreatmentRandomizationContract {
    /// Initialize the contract with an admin address
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        randomness::reset_seed(&env);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Check whether an address holds trial-admin rights. Pure read.
    pub fn is_admin(env: Env, caller: Address) -> bool {
        match env.storage().instance().get::<_, Address>(&ADMIN) {
            Some(admin) => caller == admin,
            None => false,
        }
    }

    /// Hand trial-admin rights to another address
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<bool, ContractError> {
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&ADMIN, &new_admin);

        events::publish_admin_transferred(&env, caller, new_admin);

        Ok(true)
    }

    /// Register a new treatment group with an enrollment cap
    pub fn create_treatment_group(
        env: Env,
        caller: Address,
        group_id: String,
        name: String,
        description: String,
        max_patients: u32,
    ) -> Result<bool, ContractError> {
        Self::require_admin(&env, &caller)?;

        validation::validate_identifier(&group_id)?;
        validation::validate_group_name(&name)?;
        validation::validate_description(&description)?;
        validation::validate_capacity(max_patients)?;

        if storage::get_group(&env, &group_id).is_some() {
            return Err(ContractError::Conflict);
        }

        let group = TreatmentGroup {
            name: name.clone(),
            description,
            max_patients,
            current_count: 0,
        };
        storage::put_group(&env, &group_id, &group);

        events::publish_group_created(&env, group_id, name, max_patients);

        Ok(true)
    }

    /// Get a treatment group by id
    pub fn get_treatment_group(env: Env, group_id: String) -> Option<TreatmentGroup> {
        storage::get_group(&env, &group_id)
    }

    /// Get a patient's assignment, if any
    pub fn get_patient_assignment(env: Env, patient_id: String) -> Option<PatientAssignment> {
        storage::get_assignment(&env, &patient_id)
    }

    /// Current selector accumulator.
    ///
    /// Read-only; exposed so assignment histories can be recomputed and
    /// audited off-chain.
    pub fn get_random_seed(env: Env) -> u64 {
        randomness::current_seed(&env)
    }

    /// Enroll a patient into a specific treatment group
    pub fn assign_patient(
        env: Env,
        caller: Address,
        patient_id: String,
        group_id: String,
    ) -> Result<bool, ContractError> {
        Self::require_admin(&env, &caller)?;

        validation::validate_identifier(&patient_id)?;

        let mut group = storage::get_group(&env, &group_id).ok_or(ContractError::NotFound)?;

        if storage::get_assignment(&env, &patient_id).is_some() {
            return Err(ContractError::Conflict);
        }

        if group.current_count >= group.max_patients {
            return Err(ContractError::GroupFull);
        }

        group.current_count += 1;
        storage::put_group(&env, &group_id, &group);
        storage::put_assignment(
            &env,
            &patient_id,
            &PatientAssignment {
                group_id: group_id.clone(),
            },
        );

        events::publish_patient_assigned(&env, patient_id, group_id);

        Ok(true)
    }

    /// Enroll a patient into one of the candidate groups, chosen by the
    /// deterministic selector. Returns the selected group id.
    pub fn randomize_patient(
        env: Env,
        caller: Address,
        patient_id: String,
        available_groups: Vec<String>,
    ) -> Result<String, ContractError> {
        Self::require_admin(&env, &caller)?;

        validation::validate_identifier(&patient_id)?;

        if available_groups.is_empty() {
            return Err(ContractError::BadRequest);
        }

        if storage::get_assignment(&env, &patient_id).is_some() {
            return Err(ContractError::Conflict);
        }

        // The draw advances the seed even when the checks below reject the
        // selected candidate; the failed call still consumes its position
        // in the selector sequence.
        let index = randomness::next_index(&env, available_groups.len());

        // index is reduced mod the list length
        let group_id = available_groups.get_unchecked(index);

        let mut group = storage::get_group(&env, &group_id).ok_or(ContractError::NotFound)?;

        if group.current_count >= group.max_patients {
            return Err(ContractError::GroupFull);
        }

        group.current_count += 1;
        storage::put_group(&env, &group_id, &group);
        storage::put_assignment(
            &env,
            &patient_id,
            &PatientAssignment {
                group_id: group_id.clone(),
            },
        );

        events::publish_patient_randomized(
            &env,
            patient_id,
            group_id.clone(),
            available_groups.len(),
        );

        Ok(group_id)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();

        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }

        Ok(())
    }
}

#[cfg(test)]
extern crate std;
