// Runs a whole proof script.
//
// A script is a sequence of theorem blocks. Each block gets its own engine, and the blocks
// never see each other's state. The interpreter keeps no state between runs, so a caller
// that wants live feedback just reruns it on the latest text.

use tracing::{debug, trace};

use crate::engine::{Engine, EngineConfig};
use crate::interfaces::{GoalInfo, ProofState};
use crate::syntax::statement::{Statement, StatementError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterpreterConfig {
    pub engine: EngineConfig,
}

/// The finalized output of one theorem block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TheoremResult {
    pub name: String,

    /// Goal ids are qualified with the theorem name.
    pub goals: Vec<GoalInfo>,
}

// A theorem block in progress.
struct Block {
    // Blocks that start implicitly don't get a name until they are used.
    name: Option<String>,
    engine: Engine,
}

// The state threaded through the lines of a script.
struct Session<'a> {
    config: &'a InterpreterConfig,

    // How many theorem names have been generated so far.
    auto_names: usize,

    current: Block,
    finished: Vec<TheoremResult>,
}

impl<'a> Session<'a> {
    fn new(config: &'a InterpreterConfig) -> Session<'a> {
        Session {
            config,
            auto_names: 0,
            current: Block {
                name: None,
                engine: Engine::new(config.engine.clone()),
            },
            finished: vec![],
        }
    }

    fn next_auto_name(&mut self) -> String {
        self.auto_names += 1;
        format!("theorem{}", self.auto_names)
    }

    // Finishes the current block and starts a new one.
    fn start_block(&mut self, name: Option<String>) {
        let block = std::mem::replace(
            &mut self.current,
            Block {
                name,
                engine: Engine::new(self.config.engine.clone()),
            },
        );
        self.flush(block);
    }

    fn flush(&mut self, block: Block) {
        let Some(name) = block.name else {
            // Nothing was ever sent to this block.
            return;
        };
        let goals: Vec<GoalInfo> = block
            .engine
            .finalize()
            .into_iter()
            .map(|mut goal| {
                goal.id = format!("{}:{}", name, goal.id);
                goal
            })
            .collect();
        debug!(theorem = %name, goals = goals.len(), "finished theorem");
        self.finished.push(TheoremResult { name, goals });
    }

    // The engine for a line that belongs to the current block.
    fn engine(&mut self) -> &mut Engine {
        if self.current.name.is_none() {
            self.current.name = Some(self.next_auto_name());
        }
        &mut self.current.engine
    }

    fn step(mut self, line_number: usize, line: &str) -> Self {
        let statement = match Statement::parse(line) {
            Ok(Some(statement)) => statement,
            Ok(None) => return self,
            Err(e @ StatementError::BadTheoremName(_)) => {
                // A bad theorem line still starts a new block.
                let name = self.next_auto_name();
                self.start_block(Some(name));
                self.engine().record_error(line_number, e);
                return self;
            }
            Err(e) => {
                self.engine().record_error(line_number, e);
                return self;
            }
        };
        trace!(line = line_number, statement = ?statement, "interpreting");

        match statement {
            Statement::Theorem { name } => {
                let name = name.unwrap_or_else(|| self.next_auto_name());
                self.start_block(Some(name));
            }
            Statement::End => self.start_block(None),
            Statement::Hypothesis { name, formula } => self.engine().add_hyp(&name, formula),
            Statement::Goal { formula } => self.engine().add_goal(formula),
            Statement::Tactic { name, args } => {
                self.engine().apply_tactic(&name, &args, line_number)
            }
        }
        self
    }

    fn finish(mut self) -> Vec<TheoremResult> {
        self.start_block(None);
        self.finished
    }
}

/// Interprets proof scripts.
pub struct Interpreter {
    config: InterpreterConfig,
}

impl Interpreter {
    pub fn new(config: InterpreterConfig) -> Interpreter {
        Interpreter { config }
    }

    /// Runs the script from scratch, returning the result of each theorem in order.
    pub fn run(&self, text: &str) -> Vec<TheoremResult> {
        text.lines()
            .enumerate()
            .fold(Session::new(&self.config), |session, (i, line)| {
                session.step(i + 1, line)
            })
            .finish()
    }

    /// Runs the script and gathers every theorem's goals into one proof state.
    pub fn proof_state(&self, text: &str) -> ProofState {
        ProofState {
            goals: self
                .run(text)
                .into_iter()
                .flat_map(|theorem| theorem.goals)
                .collect(),
        }
    }
}

/// Interprets a script with the default, lenient configuration.
pub fn interpret(text: &str) -> ProofState {
    Interpreter::new(InterpreterConfig::default()).proof_state(text)
}
