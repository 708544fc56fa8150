//! Operation compiler - record list → expression graph → logical form

use tracing::{debug, trace};

use crate::errors::{ConversionError, Result};
use crate::features::compiler::domain::{
    ArgumentShape, ConversionRun, OperationKind, RelateArgument, CHOICE_COMPARATORS,
};
use crate::features::expression::{NodeId, NodeKind};
use crate::features::relation_catalog::{RelateRequest, RelationCatalog, RELATION_CATALOG};
use crate::features::serializer::{Connectives, ExpressionSerializer};
use crate::shared::models::{OperationRecord, Variable};

/// Table-driven dispatcher over operation keywords
#[derive(Debug, Clone)]
pub struct OperationCompiler {
    catalog: &'static RelationCatalog,
    serializer: ExpressionSerializer,
}

impl Default for OperationCompiler {
    fn default() -> Self {
        Self::new(Connectives::default())
    }
}

impl OperationCompiler {
    pub fn new(connectives: Connectives) -> Self {
        Self {
            catalog: &RELATION_CATALOG,
            serializer: ExpressionSerializer::new(connectives),
        }
    }

    pub fn serializer(&self) -> &ExpressionSerializer {
        &self.serializer
    }

    /// Compile `records` and render the last record's full expression
    pub fn compile(&self, records: &[OperationRecord]) -> Result<String> {
        let run = self.build(records)?;
        let root = run
            .root()
            .ok_or_else(|| ConversionError::lookup("Empty operation record list"))?;
        self.serializer.full_expression(run.graph(), root)
    }

    /// Compile `records` into a run without rendering it
    pub fn build(&self, records: &[OperationRecord]) -> Result<ConversionRun> {
        if records.is_empty() {
            return Err(ConversionError::lookup("Empty operation record list"));
        }

        let mut run = ConversionRun::new();
        for (index, record) in records.iter().enumerate() {
            trace!(
                "record {}: {} '{}' {:?}",
                index,
                record.operation,
                record.argument,
                record.dependencies
            );
            let node = self
                .step(&mut run, record)
                .map_err(|e| e.with_record(index))?;
            run.push_result(node);
        }
        Ok(run)
    }

    fn step(&self, run: &mut ConversionRun, record: &OperationRecord) -> Result<NodeId> {
        let keywords = record.keywords();
        let head = keywords
            .first()
            .ok_or_else(|| ConversionError::lookup("Operation record without keyword"))?;
        let kind = OperationKind::from_keyword(head)?;
        let deps = run.resolve(&record.dependencies)?;
        let argument = record.argument.as_str();

        match kind {
            OperationKind::Select => self.select(run, argument, deps),
            OperationKind::Filter => self.filter(run, &keywords, argument, deps),
            OperationKind::Exist => {
                let vars = sole_dependency_variables(run, &deps, kind)?;
                run.graph.add(NodeKind::Exists, deps, vars)
            }
            OperationKind::Or => {
                let vars = run.variable_union(&deps);
                run.graph.disjunction(deps, vars)
            }
            OperationKind::And => {
                let vars = run.variable_union(&deps);
                run.graph.conjunction(deps, vars)
            }
            OperationKind::Relate => {
                let relate = RelateArgument::parse(argument)?;
                self.relate(run, &relate, &deps)
            }
            OperationKind::Verify => {
                let verify_kind = keywords.get(1).copied().unwrap_or("is");
                if verify_kind == "rel" {
                    let relate = RelateArgument::parse(argument)?;
                    return self.relate(run, &relate, &deps);
                }
                let vars = sole_dependency_variables(run, &deps, kind)?;
                let node = NodeKind::Verify {
                    kind: verify_kind.to_string(),
                    value: argument.to_string(),
                };
                run.graph.add(node, deps, vars)
            }
            OperationKind::Query => {
                let vars = sole_dependency_variables(run, &deps, kind)?;
                let node = NodeKind::Query {
                    field: argument.to_string(),
                };
                run.graph.add(node, deps, vars)
            }
            OperationKind::Choose => self.choose(run, &keywords, argument, deps),
            OperationKind::Different | OperationKind::Same => {
                let attribute = keywords.get(1).copied().unwrap_or(argument).to_string();
                let vars = comparison_variables(run, &deps)?;
                let node = if kind == OperationKind::Same {
                    NodeKind::Same { attribute }
                } else {
                    NodeKind::Difference { attribute }
                };
                run.graph.add(node, deps, vars)
            }
            OperationKind::Common => {
                expect_dependencies(&deps, 2, kind)?;
                let vars = vec![
                    run.graph.primary_variable(deps[0])?,
                    run.graph.primary_variable(deps[1])?,
                ];
                run.graph.add(NodeKind::Common, deps, vars)
            }
        }
    }

    fn select(&self, run: &mut ConversionRun, argument: &str, deps: Vec<NodeId>) -> Result<NodeId> {
        if argument.is_empty() {
            return Err(ConversionError::lookup("select without argument"));
        }

        let (name, variable) = match ArgumentShape::classify(argument)? {
            ArgumentShape::Entity { name, id } => {
                let token = run.allocator.get_or_create(&id)?;
                (name, Variable::Entity(token))
            }
            ArgumentShape::Group { name, ids } => {
                let token = run.allocator.get_or_create(&ids)?;
                (name, Variable::Group(token))
            }
        };
        run.graph.filter("object", name, vec![variable], deps)
    }

    fn filter(
        &self,
        run: &mut ConversionRun,
        keywords: &[&str],
        argument: &str,
        deps: Vec<NodeId>,
    ) -> Result<NodeId> {
        let filter_kind = match keywords {
            [_] => "is".to_string(),
            [_, kind] => kind.to_string(),
            [_, first, second] => format!("{}_{}", first, second),
            _ => {
                return Err(ConversionError::lookup(format!(
                    "filter takes at most 2 qualifiers, got '{}'",
                    keywords.join(" ")
                )))
            }
        };
        let vars = sole_dependency_variables(run, &deps, OperationKind::Filter)?;
        run.graph.filter(filter_kind, argument, vars, deps)
    }

    fn relate(
        &self,
        run: &mut ConversionRun,
        relate: &RelateArgument,
        deps: &[NodeId],
    ) -> Result<NodeId> {
        let target = Variable::Entity(run.allocator.get_or_create(&relate.entity_id)?);
        expect_dependencies(deps, 1, OperationKind::Relate)?;
        let source = run.graph.primary_variable(deps[0])?;

        let context = match &relate.literal {
            Some(name) => vec![run
                .graph
                .filter("object", name.as_str(), vec![target], deps.to_vec())?],
            None => deps.to_vec(),
        };

        let descriptor = self.catalog.lookup(&relate.phrase)?;
        debug!(
            "relate '{}' {:?}: target {} source {} via {:?}",
            relate.phrase, relate.direction, target, source, descriptor
        );
        let request = RelateRequest {
            direction: relate.direction,
            target,
            source,
            context,
        };
        descriptor.build(&request, &mut run.graph, &mut run.allocator)
    }

    fn choose(
        &self,
        run: &mut ConversionRun,
        keywords: &[&str],
        argument: &str,
        deps: Vec<NodeId>,
    ) -> Result<NodeId> {
        match keywords {
            [_, comparator] if CHOICE_COMPARATORS.contains(comparator) => {
                return self.conditional_choice(run, comparator, false, deps);
            }
            [_, qualifier, "healthy"] => {
                if *qualifier != "less" {
                    return Err(ConversionError::lookup(format!(
                        "Unsupported comparison 'choose {} healthy'",
                        qualifier
                    )));
                }
                return self.conditional_choice(run, "healthier", true, deps);
            }
            _ => {}
        }

        let choice_kind = keywords.get(1).copied().unwrap_or("is");
        expect_dependencies(&deps, 1, OperationKind::Choose)?;

        let mut alternatives = Vec::new();
        if choice_kind == "rel" {
            let relate = RelateArgument::parse(argument)?;
            for phrase in relate.phrase.split('|') {
                // each alternative resolves its own id, so `-` mints one entity per branch
                alternatives.push(self.relate(run, &relate.with_phrase(phrase), &deps)?);
            }
        } else {
            let vars = run.graph.node(deps[0]).variables.clone();
            for value in argument.split('|') {
                let node = NodeKind::Verify {
                    kind: choice_kind.to_string(),
                    value: value.to_string(),
                };
                alternatives.push(run.graph.add(node, deps.clone(), vars.clone())?);
            }
        }

        let vars = run.variable_union(&deps);
        run.graph.disjunction(alternatives, vars)
    }

    fn conditional_choice(
        &self,
        run: &mut ConversionRun,
        comparator: &str,
        mirrored: bool,
        deps: Vec<NodeId>,
    ) -> Result<NodeId> {
        expect_dependencies(&deps, 2, OperationKind::Choose)?;

        let mut outcomes: [String; 2] = Default::default();
        let mut vars = Vec::with_capacity(2);
        for (slot, &dep) in deps.iter().enumerate() {
            let node = run.graph.node(dep);
            let name = node.filter_name().ok_or_else(|| {
                ConversionError::arity(format!(
                    "choose {} operand must be a Filter, got {}",
                    comparator,
                    node.kind.name()
                ))
            })?;
            outcomes[slot] = name.to_string();
            vars.push(run.graph.primary_variable(dep)?);
        }

        let node = NodeKind::ConditionalChoice {
            comparator: comparator.to_string(),
            outcomes,
            mirrored,
        };
        run.graph.add(node, deps, vars)
    }
}

fn expect_dependencies(deps: &[NodeId], expected: usize, kind: OperationKind) -> Result<()> {
    if deps.len() == expected {
        Ok(())
    } else {
        Err(ConversionError::arity(format!(
            "{} requires {} dependenc{}, got {}",
            kind.as_str(),
            expected,
            if expected == 1 { "y" } else { "ies" },
            deps.len()
        )))
    }
}

/// All variables of the single dependency
fn sole_dependency_variables(
    run: &ConversionRun,
    deps: &[NodeId],
    kind: OperationKind,
) -> Result<Vec<Variable>> {
    expect_dependencies(deps, 1, kind)?;
    Ok(run.graph.node(deps[0]).variables.clone())
}

/// Operands of `different` / `same`
fn comparison_variables(run: &ConversionRun, deps: &[NodeId]) -> Result<Vec<Variable>> {
    match deps {
        [first, second] => {
            let vars = vec![
                run.graph.primary_variable(*first)?,
                run.graph.primary_variable(*second)?,
            ];
            if let Some(group) = vars.iter().find(|v| v.is_group()) {
                return Err(ConversionError::arity(format!(
                    "Cannot compare list variable {} pairwise",
                    group
                )));
            }
            Ok(vars)
        }
        [only] => {
            let node = run.graph.node(*only);
            if node.variables.len() != 1 {
                return Err(ConversionError::arity(format!(
                    "Single-operand comparison needs exactly 1 bound variable, got {}",
                    node.variables.len()
                )));
            }
            Ok(node.variables.clone())
        }
        _ => Err(ConversionError::arity(format!(
            "Comparison takes 1 or 2 dependencies, got {}",
            deps.len()
        ))),
    }
}
