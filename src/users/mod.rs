use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
#[cfg(test)]
use mockall::automock;

use crate::store::MemoryStore;

use {error::*, models::*};

pub mod error;
pub mod models;
pub mod routes;


pub type DynUserService = Arc<dyn UserService + Send + Sync>;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserService {
    async fn create_user(&self, req: CreateUserRequestModel) -> Result<UserModel>;
    ///
    /// Returns every stored user, in creation order.
    ///
    async fn get_users(&self) -> Result<Vec<UserModel>>;
}

pub struct MemoryUserService {
    store: MemoryStore,
}

impl MemoryUserService {
    pub fn new_dyn(store: MemoryStore) -> DynUserService {
        Arc::new(MemoryUserService { store })
    }
}

#[async_trait]
impl UserService for MemoryUserService {
    async fn create_user(&self, req: CreateUserRequestModel) -> Result<UserModel> {
        if req.name.trim().is_empty() {
            return Err(Error::EmptyName);
        }

        let mut tables = self.store.lock()?;
        let new_id = tables.next_user_id();
        let new_user = UserModel::new(new_id, req);
        tables.users.insert(new_id, new_user.clone());

        debug!("Created user {}", new_id);
        Ok(new_user)
    }

    async fn get_users(&self) -> Result<Vec<UserModel>> {
        let tables = self.store.lock()?;
        Ok(tables.users.values().cloned().collect())
    }
}
