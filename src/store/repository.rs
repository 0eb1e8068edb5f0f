//! Employee store access.

use std::sync::RwLock;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

/// Whole-collection access to the employee roster.
///
/// Every change is a read of the full list followed by a write of the full
/// replacement list. Implementations do not need to merge concurrent writers;
/// the last write wins.
pub trait EmployeeRepository {
    /// Returns every employee.
    fn load_all(&self) -> PayrollResult<Vec<Employee>>;

    /// Replaces the stored roster with `employees`.
    fn replace_all(&self, employees: Vec<Employee>) -> PayrollResult<()>;
}

/// An employee store held in memory.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    employees: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeStore {
    /// Creates a store holding `employees`.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: RwLock::new(employees),
        }
    }
}

fn poisoned<T>(_: T) -> PayrollError {
    PayrollError::StoreUnavailable {
        message: "employee store lock poisoned".to_string(),
    }
}

impl EmployeeRepository for InMemoryEmployeeStore {
    fn load_all(&self) -> PayrollResult<Vec<Employee>> {
        Ok(self.employees.read().map_err(poisoned)?.clone())
    }

    fn replace_all(&self, employees: Vec<Employee>) -> PayrollResult<()> {
        *self.employees.write().map_err(poisoned)? = employees;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_returns_seed() {
        let store = InMemoryEmployeeStore::new(vec![Employee::new("emp_001", "Amina Yusuf")]);
        let employees = store.load_all().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, "emp_001");
    }

    #[test]
    fn test_default_store_is_empty() {
        let store = InMemoryEmployeeStore::default();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_replace_all_overwrites_everything() {
        let store = InMemoryEmployeeStore::new(vec![
            Employee::new("emp_001", "Amina Yusuf"),
            Employee::new("emp_002", "Kofi Mensah"),
        ]);

        store
            .replace_all(vec![Employee::new("emp_003", "Ngozi Eze")])
            .unwrap();

        let ids: Vec<String> = store.load_all().unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["emp_003"]);
    }

    #[test]
    fn test_load_all_returns_a_copy() {
        let store = InMemoryEmployeeStore::new(vec![Employee::new("emp_001", "Amina Yusuf")]);
        let mut employees = store.load_all().unwrap();
        employees.clear();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }
}
