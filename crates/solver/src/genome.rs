//! Genome operators shared by both search drivers.
//!
//! A genome is a plain step sequence. Operators keep genomes legal by
//! replaying them: any gene that the reached state no longer accepts is
//! resubstituted with a freshly sampled valid step.

use game_core::{
    GameEnv, GameState, PcgRng, RandomSource, Step, generate_valid_step, is_valid, resolve,
};
use rand::Rng;

use crate::evaluate::Evaluation;

pub type Genome = Vec<Step>;

#[derive(Clone, Copy)]
pub struct Operators<'a> {
    pub initial: &'a GameState,
    pub env: GameEnv<'a>,
    /// Replay seed; must match the one candidates are evaluated with.
    pub seed: u64,
    pub max_steps: usize,
}

impl Operators<'_> {
    /// A random walk of valid steps from the initial state.
    pub fn random_genome(&self, sampler: &mut dyn RandomSource) -> Genome {
        let mut genome = Vec::with_capacity(self.max_steps);
        self.rebuild(&mut genome, |_| false, sampler);
        genome
    }

    /// Replays `genome`, resampling every gene for which `resample` answers
    /// true and every gene that is no longer legal.
    ///
    /// The genome is cut right after the step that ends the encounter and
    /// otherwise extended with random valid steps up to `max_steps`.
    pub fn rebuild(
        &self,
        genome: &mut Genome,
        mut resample: impl FnMut(usize) -> bool,
        sampler: &mut dyn RandomSource,
    ) {
        genome.truncate(self.max_steps);
        let mut replay_rng = PcgRng::new(self.seed);
        let mut state = self.initial.clone();

        let mut index = 0;
        while index < genome.len() {
            if state.is_terminal() {
                genome.truncate(index);
                return;
            }
            if resample(index) || !is_valid(&genome[index], &state, &self.env) {
                genome[index] = generate_valid_step(&state, &self.env, sampler);
            }
            state = resolve(&state, &genome[index], &self.env, &mut replay_rng).0;
            index += 1;
        }

        while genome.len() < self.max_steps && !state.is_terminal() {
            let step = generate_valid_step(&state, &self.env, sampler);
            state = resolve(&state, &step, &self.env, &mut replay_rng).0;
            genome.push(step);
        }
    }
}

/// Single-point crossover at a cut shared by both parents.
pub fn crossover<R: Rng>(first: &[Step], second: &[Step], rng: &mut R) -> Genome {
    let cut = rng.gen_range(0..=first.len().min(second.len()));
    let mut child = Vec::with_capacity(second.len().max(cut));
    child.extend_from_slice(&first[..cut]);
    child.extend_from_slice(&second[cut..]);
    child
}

/// Index of the fittest of `size` uniformly drawn contenders.
pub fn tournament<R: Rng>(evaluations: &[Evaluation], size: usize, rng: &mut R) -> usize {
    let mut winner = rng.gen_range(0..evaluations.len());
    for _ in 1..size {
        let contender = rng.gen_range(0..evaluations.len());
        if evaluations[contender].fitness > evaluations[winner].fitness {
            winner = contender;
        }
    }
    winner
}

#[cfg(test)]
mod tests {
    use game_core::{
        ClassProfile, GameConfig, Hero, HeroClass, Item, ItemDefinition, Monster, MonsterKind,
        Race, ResourcePool, Spell, TablesOracle,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    struct Tables;

    impl TablesOracle for Tables {
        fn item(&self, _item: Item) -> ItemDefinition {
            ItemDefinition::new(1, 1)
        }

        fn spell_conversion_points(&self, _spell: Spell) -> u32 {
            1
        }
    }

    fn state() -> GameState {
        let hero = Hero::new(HeroClass::Fighter, Race::Human, ClassProfile::standard(), 3);
        let monsters = vec![
            Monster::new(MonsterKind::Goblin, 1, 12, 1),
            Monster::new(MonsterKind::Bandit, 1, 12, 1),
        ];
        GameState::new(hero, monsters, ResourcePool::default())
    }

    #[test]
    fn rebuilt_genomes_replay_without_rejection() {
        let initial = state();
        let config = GameConfig::default();
        let env = GameEnv::new(&Tables, &config);
        let ops = Operators {
            initial: &initial,
            env,
            seed: 3,
            max_steps: 20,
        };
        let mut sampler = PcgRng::new(11);
        let mut rng = StdRng::seed_from_u64(5);

        let mut genome = vec![Step::BuyItem(Item::FineSword), Step::ChangeTarget(9)];
        ops.rebuild(&mut genome, |_| rng.gen_bool(0.5), &mut sampler);

        let trace = crate::replay::replay(&initial, &genome, &env, 3);
        assert!(trace.is_valid());
        assert!(genome.len() <= 20);
        assert_eq!(trace.entries.len(), genome.len());
    }

    #[test]
    fn crossover_keeps_prefix_and_suffix() {
        let mut rng = StdRng::seed_from_u64(9);
        let first = vec![Step::Attack; 4];
        let second = vec![Step::NoOp; 6];
        for _ in 0..32 {
            let child = crossover(&first, &second, &mut rng);
            assert_eq!(child.len(), 6);
            let cut = child.iter().take_while(|step| **step == Step::Attack).count();
            assert!(child[cut..].iter().all(|step| *step == Step::NoOp));
        }
    }

    #[test]
    fn tournament_of_everyone_picks_the_best() {
        let mut rng = StdRng::seed_from_u64(1);
        let evaluations: Vec<Evaluation> = [3, 8, 5]
            .into_iter()
            .map(|fitness| Evaluation {
                fitness,
                resolved: 0,
                skipped: false,
            })
            .collect();
        // 64 draws over three entries miss the best with negligible odds.
        assert_eq!(tournament(&evaluations, 64, &mut rng), 1);
    }
}
