use mg_sem::{builder::fragment, config::Config, context::Context, semantics::eval::eval};

mod scenarios {
    use super::*;

    fn the_context() -> Context {
        let _ = env_logger::builder().is_test(true).try_init();
        Context::from_config(Config::default(), fragment::lexicon())
    }

    fn truth(input: &str) -> Result<bool, mg_sem::types::err::EvalError> {
        let mut the_context = the_context();
        let model = fragment::model();

        let derivation = the_context.parse(input).unwrap();
        eval(&model, &derivation.expression.meaning)
    }

    #[test]
    fn transitive_clause() {
        assert_eq!(truth("ε alice.NOM chase -s bob"), Ok(true));
    }

    #[test]
    fn adjunct_without_a_witness() {
        // The clause parses, but no quick running event exists.
        assert_eq!(truth("ε alice.NOM run -s quickly"), Ok(false));
        assert_eq!(truth("ε alice.NOM run -s"), Ok(true));
    }

    #[test]
    fn pronoun_resolution() {
        // Index 1 reads as bob, and no event has bob chasing alice.
        assert_eq!(truth("ε he.1.NOM chase -s alice"), Ok(false));
    }

    #[test]
    fn object_existential() {
        // Alice chases carol, a girl.
        assert_eq!(truth("ε.Q alice.NOM chase -s some girl"), Ok(true));
    }

    #[test]
    fn subject_universal() {
        // Carol and daisy each chase bob.
        assert_eq!(truth("ε.Q every.NOM girl chase -s bob"), Ok(true));
    }

    #[test]
    fn unknown_token() {
        let mut the_context = the_context();
        assert!(the_context.parse("ε alice.NOM snore -s").is_none());
    }
}
