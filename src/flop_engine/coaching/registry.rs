//! Ordered list of coaching modules. First match wins.

use log::{debug, warn};

use crate::flop_engine::coaching::{
    CoachContext, CoachingModule, IpDefensivoCoordinado, IpDefensivoSeco, IpMonocolor,
    IpNeutroCoordinado, IpNeutroSeco, IpOfensivoCoordinado, IpOfensivoSeco, IpPareado,
    IpPareadoNeutro,
};

pub struct Registry {
    modules: Vec<Box<dyn CoachingModule>>,
}

impl Registry {
    /// Empty registry; [`Registry::pick`] never matches.
    pub fn new() -> Self {
        Registry { modules: Vec::new() }
    }

    /// The nine built-in modules in routing order.
    pub fn standard() -> Self {
        Registry::new()
            .with(IpOfensivoSeco)
            .with(IpOfensivoCoordinado)
            .with(IpNeutroSeco)
            .with(IpNeutroCoordinado)
            .with(IpDefensivoSeco)
            .with(IpDefensivoCoordinado)
            .with(IpMonocolor)
            .with(IpPareadoNeutro)
            .with(IpPareado)
    }

    pub fn with<M: CoachingModule + 'static>(mut self, module: M) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// First module whose predicate holds. A module whose predicate fails is
    /// logged and skipped.
    pub fn pick(&self, ctx: &CoachContext) -> Option<&dyn CoachingModule> {
        for module in &self.modules {
            match module.matches(ctx) {
                Ok(true) => {
                    debug!("spot {} -> {}", ctx.spot, module.id());
                    return Some(module.as_ref());
                }
                Ok(false) => {}
                Err(e) => warn!("skipping {}: {}", module.id(), e),
            }
        }
        debug!("spot {} -> no module", ctx.spot);
        None
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::standard()
    }
}
