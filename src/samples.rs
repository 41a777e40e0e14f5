//! Sample texts for demonstrations and tests.

/// Shift-cipher sample; decrypts to `howmanypossiblekeysarethere` under key 7.
pub const SHIFT_CIPHERTEXT: &str = "OVDTHUFWVZZPISLRLFZHYLAOLYL";

/// Monoalphabetic substitution sample (Katz & Lindell); a general substitution,
/// so it is not breakable by the shift attack.
pub const MONO_CIPHERTEXT: &str = "JGRMQOYGHMVBJWRWQFPWHGFFDQGFPFZRKBEEBJIZQQOCIBZKLFAFGQVFZFWWEOGWOPFGFHWOLPHLRLOLFDMFGQWB\
    LWBWQOLKFWBYLBLYLFSFLJGRMQBOLWJVFPFWQVHQWFFPQOQVFPQOCFPOGFWFJIGFQVHLHLROQVFGWJVFPFOLFHGQ\
    VQVFILEOGQILHQFQGIQVVOSFAFGBWQVHQWIJVWJVFPFWHGFIWIHZZRQGBABHZQOCGFHX";

/// Key used by the `demo` command to encrypt [`SCIENCE_PLAINTEXT`].
pub const DEMO_KEY: &str = "queen";

/// Long English plaintext over `a..z`, enough for the period attack to lock on.
pub const SCIENCE_PLAINTEXT: &str = "sciencefromlatinscientiaknowledgeisasystematicenterprisethatbuildsandorganizesknowledgei\
    ntheformoftestableexplanationsandpredictionsabouttheuniversetheearliestrootsofsciencecan\
    betracedtoancientegyptandmesopotamiainaroundthreethousandtotwelvehundredbcetheircontribu\
    tionstomathematicsastronomyandmedicineenteredandshapedgreeknaturalphilosophyofclassicala\
    ntiquitywherebyformalattemptsweremadetoprovideexplanationsofeventsinthephysicalworldbase\
    donnaturalcausesafterthefallofthewesternromanempireknowledgeofgreekconceptionsoftheworld\
    deterioratedinwesterneuropeduringtheearlycenturiesfourhundredtoonethousandceofthemiddlea\
    gesbutwaspreservedinthemuslimworldduringtheislamicgoldenagetherecoveryandassimilationofg\
    reekworksandislamicinquiriesintowesterneuropefromthetenthtothirteenthcenturyrevivednatur\
    alphilosophywhichwaslatertransformedbythescientificrevolutionthatbeganinthesixteenthcent\
    uryasnewideasanddiscoveriesdepartedfrompreviousgreekconceptionsandtraditionsthescientifi\
    cmethodsoonplayedagreaterroleinknowledgecreationanditwasnotuntilthenineteenthcenturythat\
    manyoftheinstitutionalandprofessionalfeaturesofsciencebegantotakeshapealongwiththechangi\
    ngofnaturalphilosophytonaturalsciencemodernscienceistypicallydividedintothreemajorbranch\
    esthatconsistofthenaturalsciencesbiologychemistryandphysicswhichstudynatureinthebroadest\
    sensethesocialscienceseconomicspsychologyandsociologywhichstudyindividualsandsocietiesan\
    dtheformalscienceslogicmathematicsandtheoreticalcomputersciencewhichdealwithsymbolsgover\
    nedbyrulesthereisdisagreementhoweveronwhethertheformalsciencesactuallyconstituteascience\
    astheydonotrelyonempiricalevidencedisciplinesthatuseexistingscientificknowledgeforpracti\
    calpurposessuchasengineeringandmedicinearedescribedasappliedsciencesnewknowledgeinscienc\
    eisadvancedbyresearchfromscientistswhoaremotivatedbycuriosityabouttheworldandadesiretoso\
    lveproblemscontemporaryscientificresearchishighlycollaborativeandisusuallydonebyteamsina\
    cademicandresearchinstitutionsgovernmentagenciesandcompaniesthepracticalimpactoftheirwor\
    khasledtotheemergenceofsciencepoliciesthatseektoinfluencethescientificenterprisebypriori\
    tizingthedevelopmentofcommercialproductsarmamentshealthcarepublicinfrastructureandenviro\
    nmentalprotection";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_alphabetic() {
        assert!(SHIFT_CIPHERTEXT.chars().all(|c| c.is_ascii_uppercase()));
        assert!(MONO_CIPHERTEXT.chars().all(|c| c.is_ascii_uppercase()));
        assert!(SCIENCE_PLAINTEXT.chars().all(|c| c.is_ascii_lowercase()));
        assert_eq!(SCIENCE_PLAINTEXT.len(), 2217);
    }
}
