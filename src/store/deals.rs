// src/store/deals.rs

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::deal::{Deal, DealStage};

// Fatia de estado das negociações: os baldes por estágio mais o estado de
// tela que a UI acompanha (loading, erro, seleção, edição). Toda mutação
// aqui é síncrona e pura; quem fala com a API mock é a camada de serviço.
#[derive(Debug)]
pub struct DealsState {
    deals: HashMap<DealStage, Vec<Deal>>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: Option<Deal>,
    pub editing: Option<Deal>,
}

impl Default for DealsState {
    fn default() -> Self {
        // Os quatro baldes sempre existem, mesmo vazios.
        let mut deals = HashMap::new();
        for stage in DealStage::ALL {
            deals.insert(stage, Vec::new());
        }
        Self {
            deals,
            loading: false,
            error: None,
            selected: None,
            editing: None,
        }
    }
}

impl DealsState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- LEITURA ---

    pub fn bucket(&self, stage: DealStage) -> &[Deal] {
        self.deals.get(&stage).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn all(&self) -> &HashMap<DealStage, Vec<Deal>> {
        &self.deals
    }

    pub fn find(&self, id: Uuid) -> Option<&Deal> {
        self.deals.values().flatten().find(|d| d.id == id)
    }

    // --- MUTAÇÕES ---

    /// Substitui os baldes inteiros (resultado de um get_deals).
    pub fn set_deals(&mut self, mut deals: HashMap<DealStage, Vec<Deal>>) {
        for stage in DealStage::ALL {
            deals.entry(stage).or_default();
        }
        self.deals = deals;
    }

    /// Nova negociação entra na FRENTE do balde do seu estágio.
    pub fn add_deal(&mut self, deal: Deal) {
        self.deals.entry(deal.stage).or_default().insert(0, deal);
    }

    /// Substitui a negociação onde quer que ela esteja (só o id é conhecido).
    pub fn update_deal(&mut self, updated: Deal) {
        for bucket in self.deals.values_mut() {
            if let Some(slot) = bucket.iter_mut().find(|d| d.id == updated.id) {
                *slot = updated.clone();
            }
        }
        if self.selected.as_ref().is_some_and(|d| d.id == updated.id) {
            self.selected = Some(updated);
        }
    }

    /// Mesma transição da API: tira da origem, ajusta `stage`, insere no
    /// destino em `new_index` (limitado). No-op se o id não está na origem.
    pub fn move_deal(
        &mut self,
        deal_id: Uuid,
        from_stage: DealStage,
        to_stage: DealStage,
        new_index: usize,
    ) {
        let Some(source) = self.deals.get_mut(&from_stage) else {
            return;
        };
        let Some(index) = source.iter().position(|d| d.id == deal_id) else {
            return;
        };

        let mut deal = source.remove(index);
        deal.stage = to_stage;

        let target = self.deals.entry(to_stage).or_default();
        let insert_at = new_index.min(target.len());
        target.insert(insert_at, deal.clone());

        if self.selected.as_ref().is_some_and(|d| d.id == deal_id) {
            self.selected = Some(deal);
        }
    }

    pub fn delete_deal(&mut self, id: Uuid) {
        for bucket in self.deals.values_mut() {
            bucket.retain(|d| d.id != id);
        }
        if self.selected.as_ref().is_some_and(|d| d.id == id) {
            self.selected = None;
        }
    }

    pub fn set_selected(&mut self, deal: Option<Deal>) {
        self.selected = deal;
    }

    pub fn set_editing(&mut self, deal: Option<Deal>) {
        self.editing = deal;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
