use super::ClauseName;

/// Clause pipelines used to build each kind of statement.
#[derive(Debug, Clone)]
pub struct Callbacks {
    pub query: Processor,
    pub create: Processor,
    pub update: Processor,
    pub delete: Processor,
}

/// An ordered list of clause names. Building a statement with a processor
/// renders each listed clause the statement holds, in order.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    pub clauses: Vec<ClauseName>,
}

impl Processor {
    pub fn new(clauses: impl IntoIterator<Item = ClauseName>) -> Processor {
        Processor {
            clauses: clauses.into_iter().collect(),
        }
    }

    pub fn clauses(&self) -> &[ClauseName] {
        &self.clauses
    }

    /// Appends a named extension clause to the pipeline.
    pub fn register(&mut self, name: ClauseName) -> &mut Self {
        if !self.clauses.contains(&name) {
            self.clauses.push(name);
        }
        self
    }
}

impl Default for Callbacks {
    fn default() -> Self {
        use ClauseName::*;

        Callbacks {
            query: Processor::new([Select, From, Where, OrderBy, Limit]),
            create: Processor::new([Insert, Values]),
            update: Processor::new([Update, Set, Where]),
            delete: Processor::new([Delete, From, Where]),
        }
    }
}
