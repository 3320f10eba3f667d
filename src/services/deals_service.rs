// src/services/deals_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    api::DealsApi,
    common::error::AppError,
    models::deal::{CreateDealPayload, Deal, DealStage, UpdateDealPayload},
    store::Store,
};

// Orquestra o funil: espera a API mock resolver e então aplica no store a
// mesma mutação que a API aplicou nos baldes dela.
#[derive(Clone)]
pub struct DealsService {
    api: DealsApi,
}

impl DealsService {
    pub fn new(api: DealsApi) -> Self {
        Self { api }
    }

    pub async fn load(&self, store: &mut Store) -> Result<(), AppError> {
        store.deals.set_loading(true);
        store.deals.set_error(None);

        match self.api.get_deals().await {
            Ok(deals) => {
                store.deals.set_deals(deals);
                store.deals.set_loading(false);
                Ok(())
            }
            Err(err) => {
                store.deals.set_loading(false);
                store.deals.set_error(Some(err.to_string()));
                store.ui.notify_error("Failed to load deals");
                Err(err)
            }
        }
    }

    pub async fn create(
        &self,
        store: &mut Store,
        payload: CreateDealPayload,
    ) -> Result<Deal, AppError> {
        if let Err(errors) = payload.validate() {
            store.ui.notify_error("Failed to create deal");
            return Err(errors.into());
        }

        match self.api.create_deal(payload).await {
            Ok(deal) => {
                store.deals.add_deal(deal.clone());
                store.ui.notify_success("Deal created successfully");
                Ok(deal)
            }
            Err(err) => {
                store.ui.notify_error("Failed to create deal");
                Err(err)
            }
        }
    }

    pub async fn update(
        &self,
        store: &mut Store,
        id: Uuid,
        updates: UpdateDealPayload,
    ) -> Result<Deal, AppError> {
        if let Err(errors) = updates.validate() {
            store.ui.notify_error("Failed to update deal");
            return Err(errors.into());
        }

        match self.api.update_deal(id, updates).await {
            Ok(deal) => {
                store.deals.update_deal(deal.clone());
                store.ui.notify_success("Deal updated successfully");
                Ok(deal)
            }
            Err(err) => {
                store.ui.notify_error("Failed to update deal");
                Err(err)
            }
        }
    }

    pub async fn delete(&self, store: &mut Store, id: Uuid) -> Result<(), AppError> {
        match self.api.delete_deal(id).await {
            Ok(()) => {
                store.deals.delete_deal(id);
                store.ui.notify_success("Deal deleted successfully");
                Ok(())
            }
            Err(err) => {
                store.ui.notify_error("Failed to delete deal");
                Err(err)
            }
        }
    }

    /// Arraste no quadro: a API move primeiro; com o Ok o store repete a
    /// transição. Sem toast — o movimento já é o feedback visual.
    pub async fn move_deal(
        &self,
        store: &mut Store,
        deal_id: Uuid,
        from_stage: DealStage,
        to_stage: DealStage,
        new_index: usize,
    ) -> Result<(), AppError> {
        self.api
            .move_deal(deal_id, from_stage, to_stage, new_index)
            .await?;

        store.deals.move_deal(deal_id, from_stage, to_stage, new_index);
        Ok(())
    }
}
