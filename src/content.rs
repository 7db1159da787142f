//! Seed content generator for the 30-day Dominion campaign.
//!
//! Everything here is pure: the campaign calendar, the day-theme table and
//! the derived spark/reflection-card sets are recomputed from constants on
//! every call. Persistence is the caller's problem.

use crate::model::{
    AudienceSegment, BlogPost, Event, ReflectionCard, Spark, SparkCategory, SparkStatus,
};
use anyhow::{bail, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::HashSet;

pub const CAMPAIGN_DAYS: usize = 30;

/// Hour-of-day (UTC) at which each day's content goes live. Publish time is
/// deliberately not adjusted per audience segment.
const PUBLISH_HOUR_UTC: u32 = 5;

/// Expected persisted cardinality after a full sync: one spark per
/// (day, segment) pair.
pub const EXPECTED_CAMPAIGN_SPARKS: usize = CAMPAIGN_DAYS * AudienceSegment::ALL.len();

const WEEK_THEMES: [&str; 5] = [
    "Week 1: Foundations of Dominion",
    "Week 2: Dominion in the Mind",
    "Week 3: Dominion in Relationships",
    "Week 4: Dominion in Work and Witness",
    "Week 5: Sent to Reign",
];

/// First calendar day of the campaign; day offsets 0..29 count from here.
pub fn campaign_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 3).expect("valid campaign start date")
}

/// Last calendar day of the campaign (closed interval).
pub fn campaign_end() -> NaiveDate {
    campaign_start() + Duration::days(CAMPAIGN_DAYS as i64 - 1)
}

/// Editorial copy for one campaign day. Embedded directly in the day-theme
/// record so a theme and its enrichment cannot drift apart.
struct DayCopy {
    description: &'static str,
    prayer: &'static str,
    full_teaching: &'static str,
    context_background: &'static str,
    application_points: &'static [&'static str],
    todays_action: &'static str,
    reflection_question: &'static str,
}

struct DayTheme {
    title: &'static str,
    scripture_ref: &'static str,
    scripture_text: &'static str,
    featured: bool,
    /// `None` means the editorial team has not written copy for this day
    /// yet; generation falls back to [`GENERIC_COPY`] rather than failing.
    copy: Option<DayCopy>,
}

/// Shared fallback used for any day whose editorial copy is missing.
/// Missing copy must never block the sync pipeline.
static GENERIC_COPY: DayCopy = DayCopy {
    description: "Take a quiet moment with today's passage. Read it slowly, \
                  notice one phrase that stands out, and carry it with you \
                  through the day.",
    prayer: "Father, open my eyes to what You are saying to me today, and give \
             me the courage to live it out. Amen.",
    full_teaching: "Every day of this journey builds on the same conviction: \
                    God's word is living, and a single verse taken seriously \
                    can reorder a whole day. Today there is no long teaching. \
                    Sit with the passage itself, read it more than once, and \
                    ask what obedience would look like before tonight.",
    context_background: "Some days in the campaign are left deliberately \
                         simple so the text can speak without commentary.",
    application_points: &[
        "Read today's passage twice, once aloud.",
        "Write down the one phrase that stays with you.",
        "Act on it once before the end of the day.",
    ],
    todays_action: "Share the phrase that stood out to you with one other person.",
    reflection_question: "What is one concrete way today's passage could change what you do next?",
};

static DAY_THEMES: [DayTheme; CAMPAIGN_DAYS] = [
    // Week 1: Foundations of Dominion
    DayTheme {
        title: "Dominion Begins with Belonging",
        scripture_ref: "Genesis 1:26-28",
        scripture_text: "Then God said, \"Let us make mankind in our image, in our likeness, \
                         so that they may rule... over all the earth.\"",
        featured: true,
        copy: Some(DayCopy {
            description: "Dominion is not something you seize; it is something you are given. \
                          Before God ever speaks of ruling, He speaks of image and likeness, \
                          of belonging to Him.",
            prayer: "Father, before I do anything for You today, remind me that I belong to \
                     You. Let everything I steward flow from that. Amen.",
            full_teaching: "Genesis puts identity before assignment. Humanity is made in \
                            God's image first and handed authority second, which means \
                            dominion detached from belonging always curdles into control. \
                            The campaign starts here because every later practice, in the \
                            mind, at home, at work, stands or falls on whether you know \
                            whose you are.",
            context_background: "Genesis 1 was written to a people surrounded by empires \
                                 whose kings alone claimed to bear the divine image. The \
                                 text democratizes that claim: every person carries it.",
            application_points: &[
                "Begin the day by naming yourself as God's before naming your roles.",
                "Notice one moment where you act from insecurity rather than belonging.",
                "Thank God tonight for one thing He has entrusted to you.",
            ],
            todays_action: "Write a one-line statement of who you are before what you do, and keep it visible today.",
            reflection_question: "Where in your life are you trying to rule without first resting in belonging?",
        }),
    },
    DayTheme {
        title: "Made in His Image",
        scripture_ref: "Psalm 8:4-6",
        scripture_text: "What is mankind that you are mindful of them... You made them rulers \
                         over the works of your hands.",
        featured: false,
        copy: Some(DayCopy {
            description: "The psalmist looks at the night sky and is staggered, not by human \
                          smallness, but by the dignity God has conferred on us anyway.",
            prayer: "Lord, when I feel insignificant, lift my eyes to how You see me. Amen.",
            full_teaching: "Psalm 8 holds two truths in tension: we are dust, and we are \
                            crowned. Losing either half distorts dominion. Forget the dust \
                            and you get arrogance; forget the crown and you get passivity. \
                            Healthy authority lives between the two.",
            context_background: "Psalm 8 is a meditation on Genesis 1, sung. It turns \
                                 doctrine about the image of God into worship.",
            application_points: &[
                "Treat one person today with the dignity Psalm 8 assigns them.",
                "Refuse one self-deprecating thought and replace it with verse 5.",
                "Look at the sky tonight and say verse 4 out loud.",
            ],
            todays_action: "Send an encouraging message to someone who feels overlooked.",
            reflection_question: "Which is harder for you to believe: that you are dust, or that you are crowned?",
        }),
    },
    DayTheme {
        title: "The Authority of the Word",
        scripture_ref: "Joshua 1:8",
        scripture_text: "Keep this Book of the Law always on your lips; meditate on it day and \
                         night... Then you will be prosperous and successful.",
        featured: false,
        copy: Some(DayCopy {
            description: "Joshua is handed an army, a promise, and one non-negotiable habit: \
                          keep the word in your mouth and mind, day and night.",
            prayer: "God, make Your word the loudest voice in my life today. Amen.",
            full_teaching: "Before Joshua crosses any river or takes any city, God ties his \
                            success to meditation. Dominion runs on internalized truth, not \
                            adrenaline. What you rehearse, you become; what you neglect, you \
                            forfeit.",
            context_background: "Joshua 1 is a leadership handover speech. Moses is dead, and \
                                 the command to meditate is given to a general, not a monk.",
            application_points: &[
                "Pick one verse and return to it three times today.",
                "Say it aloud once; Joshua's word for meditate implies muttering.",
                "Link it to a decision you actually face this week.",
            ],
            todays_action: "Memorize Joshua 1:8 and recite it before your last meal today.",
            reflection_question: "What currently occupies the mental space Scripture is meant to hold?",
        }),
    },
    DayTheme {
        title: "Seated with Christ",
        scripture_ref: "Ephesians 2:6",
        scripture_text: "And God raised us up with Christ and seated us with him in the \
                         heavenly realms in Christ Jesus.",
        featured: false,
        copy: Some(DayCopy {
            description: "Paul describes your position in the past tense: already raised, \
                          already seated. Dominion starts from rest, not striving.",
            prayer: "Jesus, teach me to work from the seat You have given me, not toward it. Amen.",
            full_teaching: "A seated posture is a finished posture. Ephesians insists that \
                            union with Christ places believers in a position of authority \
                            they did not earn and cannot lose by a bad week. The fight is \
                            fought from victory, not for it.",
            context_background: "Ephesians was written to a city dominated by the Artemis \
                                 cult and its spiritual economy; 'heavenly realms' language \
                                 confronts that power structure directly.",
            application_points: &[
                "Before a stressful task, pause and picture where Ephesians says you sit.",
                "Replace one 'I have to prove' thought with 'it is already settled'.",
                "Pray for one situation from authority rather than anxiety.",
            ],
            todays_action: "Write Ephesians 2:6 where you will see it during your most stressful hour.",
            reflection_question: "What would you stop striving for if you believed you were already seated?",
        }),
    },
    DayTheme {
        title: "Steward, Not Owner",
        scripture_ref: "Psalm 24:1",
        scripture_text: "The earth is the LORD's, and everything in it, the world, and all who \
                         live in it.",
        featured: false,
        copy: Some(DayCopy {
            description: "One verse dismantles every illusion of ownership. Everything you \
                          rule, you rule on behalf of Someone else.",
            prayer: "Lord, loosen my grip on what was never mine, and make me faithful with \
                     what is Yours. Amen.",
            full_teaching: "Stewardship is dominion with the pronouns corrected. The manager \
                            of another's estate works hard precisely because the estate is \
                            not his. Psalm 24 frees you from the panic of ownership and the \
                            carelessness of tenancy at the same time.",
            context_background: "Psalm 24 is an entrance liturgy, sung while ascending to \
                                 worship; the claim of God's ownership opens the gate.",
            application_points: &[
                "Name three things you call 'mine' and re-label them 'entrusted'.",
                "Make one financial choice today as a manager, not an owner.",
                "Hold one plan loosely in prayer tonight.",
            ],
            todays_action: "Give something away today, money, time, or an open hand on a plan.",
            reflection_question: "Which possession or role would be hardest to hand back, and why?",
        }),
    },
    DayTheme {
        title: "The Power of Daily Obedience",
        scripture_ref: "Luke 16:10",
        scripture_text: "Whoever can be trusted with very little can also be trusted with much.",
        featured: false,
        copy: Some(DayCopy {
            description: "Jesus measures trustworthiness in small denominations. The unseen \
                          ten-minute obediences decide the visible assignments.",
            prayer: "Father, make me faithful in the small thing in front of me today. Amen.",
            full_teaching: "We imagine dominion as a promotion and God imagines it as a \
                            progression. Luke 16 says capacity is built in very little: the \
                            returned call, the honest expense report, the prayer kept when \
                            nobody checks. There are no large acts of faithfulness, only \
                            small ones compounded.",
            context_background: "The saying closes the parable of the shrewd manager, a \
                                 story about handling worldly wealth with an eye on eternity.",
            application_points: &[
                "Identify today's 'very little' and do it completely.",
                "Finish one task you have been 90% done with for a week.",
                "Keep one private commitment no one else knows about.",
            ],
            todays_action: "Choose the smallest neglected duty on your list and complete it first.",
            reflection_question: "What small thing have you been treating as beneath your faithfulness?",
        }),
    },
    DayTheme {
        title: "Testimony: From Pressure to Peace",
        scripture_ref: "Philippians 4:6-7",
        scripture_text: "Do not be anxious about anything... And the peace of God, which \
                         transcends all understanding, will guard your hearts.",
        featured: false,
        copy: Some(DayCopy {
            description: "A member of our community tells how a season of crushing deadlines \
                          became the place she learned to pray first and plan second.",
            prayer: "God of peace, guard my heart and mind today in Christ Jesus. Amen.",
            full_teaching: "In this week's testimony, Amara describes eighteen months of \
                            pressure that medication and planning apps never touched, and \
                            the slow discovery that Philippians 4 is a practice, not a \
                            platitude: petition with thanksgiving, repeated daily, until \
                            peace stood guard where panic used to.",
            context_background: "Paul wrote Philippians from prison, which is what keeps \
                                 verse 6 from sounding naive.",
            application_points: &[
                "Turn your top worry into one sentence of petition with thanks.",
                "Notice the moment pressure spikes today and pray before you plan.",
                "Tell someone one thing God has carried you through.",
            ],
            todays_action: "Write down your biggest current pressure and pray Philippians 4:6 over it by name.",
            reflection_question: "Where has anxiety been doing the guarding that peace is meant to do?",
        }),
    },
    // Week 2: Dominion in the Mind
    DayTheme {
        title: "Renewing the Mind",
        scripture_ref: "Romans 12:2",
        scripture_text: "Do not conform to the pattern of this world, but be transformed by \
                         the renewing of your mind.",
        featured: true,
        copy: Some(DayCopy {
            description: "Transformation in Romans is not willpower; it is renovation. The \
                          mind is the construction site where dominion is won or lost.",
            prayer: "Spirit of God, renovate my thinking until my life looks like Your will. Amen.",
            full_teaching: "Paul's verb is passive, be transformed, but the renewing is \
                            something you cooperate with daily. Every input is either \
                            conforming you or renewing you; there is no neutral scroll. \
                            Week two of the campaign turns from identity to the battlefield \
                            where identity is contested: your thought life.",
            context_background: "Romans 12 pivots the letter from eleven chapters of doctrine \
                                 to lived response; renewal is the hinge.",
            application_points: &[
                "Audit your first and last 15 minutes of screen time today.",
                "Swap one conforming input for one renewing one.",
                "Ask at day's end: what did I let shape me today?",
            ],
            todays_action: "Replace your first media check of the day with today's passage.",
            reflection_question: "Which 'pattern of this world' has been quietly setting your defaults?",
        }),
    },
    DayTheme {
        title: "Taking Thoughts Captive",
        scripture_ref: "2 Corinthians 10:5",
        scripture_text: "We take captive every thought to make it obedient to Christ.",
        featured: false,
        copy: Some(DayCopy {
            description: "Paul talks about thoughts the way a soldier talks about prisoners: \
                          noticed, named, and marched somewhere new.",
            prayer: "Lord, make me quick to notice the thoughts I have been letting roam free. Amen.",
            full_teaching: "You cannot stop a thought arriving, but you decide its visa \
                            status. Taking captive is active: interrogate the thought, is it \
                            true, is it obedient to Christ, and if not, escort it out by \
                            speaking what is true. Passivity in the mind is surrender.",
            context_background: "The image comes from siege warfare, Paul is demolishing \
                                 strongholds, arguments raised against the knowledge of God.",
            application_points: &[
                "Catch one recurring negative thought and write it down verbatim.",
                "Put it on trial: true, partly true, or a lie?",
                "Answer it with one sentence of Scripture, out loud if possible.",
            ],
            todays_action: "Keep a note open today and log every time one specific anxious thought returns.",
            reflection_question: "Which thought have you been hosting that deserves to be a captive?",
        }),
    },
    DayTheme {
        title: "Guarding the Heart",
        scripture_ref: "Proverbs 4:23",
        scripture_text: "Above all else, guard your heart, for everything you do flows from it.",
        featured: false,
        copy: Some(DayCopy {
            description: "Proverbs ranks heart-guarding 'above all else', before career, \
                          reputation, or security. The wellspring decides the river.",
            prayer: "Father, show me what has been slipping past the gate of my heart. Amen.",
            full_teaching: "A guard at a gate does two things: keeps dangerous things out and \
                            precious things in. Most of us do neither, we are open borders \
                            for cynicism and leaky vessels for joy. Guarding is not \
                            isolation; it is curation of what gets to live at the center.",
            context_background: "In Hebrew thought the heart is the seat of intellect and \
                                 will, not merely emotion; this is about your command center.",
            application_points: &[
                "Name one influence that consistently leaves you worse.",
                "Set one concrete boundary around it this week.",
                "Name one practice that fills the well, and schedule it.",
            ],
            todays_action: "Unfollow, mute, or step back from one input that poisons the wellspring.",
            reflection_question: "What has unrestricted access to your heart that has not earned it?",
        }),
    },
    DayTheme {
        title: "Peace That Rules",
        scripture_ref: "Colossians 3:15",
        scripture_text: "Let the peace of Christ rule in your hearts, since as members of one \
                         body you were called to peace.",
        featured: false,
        copy: Some(DayCopy {
            description: "Paul's word 'rule' is the word for an umpire. Peace is meant to \
                          make the calls in your inner life.",
            prayer: "Prince of Peace, be the umpire of every decision I face today. Amen.",
            full_teaching: "An umpire does not play the game; he decides what stands. \
                            Colossians offers peace as a decision-making instrument: when a \
                            choice consistently strips the peace of Christ, that is a call \
                            being made. Dominion in the mind includes letting the right \
                            arbiter officiate.",
            context_background: "The verse sits in a passage about communal life, peace \
                                 umpires between believers, not only within them.",
            application_points: &[
                "Bring one pending decision before God and notice where peace rests.",
                "Refuse to decide one thing today from panic.",
                "Make peace with one person before making plans with them.",
            ],
            todays_action: "Delay one non-urgent decision until you have prayed it to peace.",
            reflection_question: "What decision are you trying to make while overruling the umpire?",
        }),
    },
    DayTheme {
        title: "Courage over Fear",
        scripture_ref: "2 Timothy 1:7",
        scripture_text: "For the Spirit God gave us does not make us timid, but gives us \
                         power, love and self-discipline.",
        featured: false,
        copy: Some(DayCopy {
            description: "Timidity is not your spirit; it is an impostor. What God supplied \
                          is power, love, and a sound mind.",
            prayer: "Holy Spirit, replace my timidity with Your power, love, and sound judgment. Amen.",
            full_teaching: "Paul writes to a young leader tempted to shrink back. The verse \
                            does not shame fear; it re-identifies it, that spirit did not \
                            come from God, so it carries no authority over you. Courage in \
                            Scripture is rarely a feeling; it is obedience taken while \
                            afraid.",
            context_background: "Second Timothy is Paul's final letter, written from a Roman \
                                 prison to a protégé losing his nerve.",
            application_points: &[
                "Name the thing you have been postponing out of fear.",
                "Break it into one step small enough to take today.",
                "Take it, afraid if necessary.",
            ],
            todays_action: "Do the one conversation or task fear has tabled for weeks, today.",
            reflection_question: "What would you attempt this month if timidity had no vote?",
        }),
    },
    DayTheme {
        title: "Gratitude Changes the Atmosphere",
        scripture_ref: "1 Thessalonians 5:18",
        scripture_text: "Give thanks in all circumstances; for this is God's will for you in \
                         Christ Jesus.",
        featured: false,
        copy: Some(DayCopy {
            description: "Thanksgiving is the one command with no qualifying clause: in all \
                          circumstances. It is less a mood than a discipline of sight.",
            prayer: "Father, train my eyes to find Your gifts inside ordinary hours. Amen.",
            full_teaching: "Gratitude does not deny what is wrong; it refuses to let what is \
                            wrong narrate alone. In all circumstances is not for all \
                            circumstances, you are not thanking God for the loss, but \
                            finding Him inside it. Practiced daily, thanksgiving rewires \
                            what your mind reaches for first.",
            context_background: "Thessalonians is likely Paul's earliest letter, written to a \
                                 persecuted church, which gives 'all circumstances' teeth.",
            application_points: &[
                "List ten specific thanks before any requests today.",
                "Thank one person who never hears it from you.",
                "Find one thanksgiving inside your hardest current circumstance.",
            ],
            todays_action: "Start a running gratitude note and add three entries before tonight.",
            reflection_question: "What has complaining been costing the atmosphere of your home or team?",
        }),
    },
    DayTheme {
        title: "Testimony: A Mind Made New",
        scripture_ref: "Romans 8:6",
        scripture_text: "The mind governed by the flesh is death, but the mind governed by \
                         the Spirit is life and peace.",
        featured: false,
        copy: Some(DayCopy {
            description: "Daniel spent years convinced his intrusive, spiralling thoughts \
                          were simply who he was. This is the story of a slow renewal.",
            prayer: "Spirit of life, govern my mind today where old patterns used to rule. Amen.",
            full_teaching: "In this testimony Daniel walks through two years of counselling, \
                            Scripture memory, and honest community, and is careful to say \
                            the renewal was gradual, ordinary, and real. The week's theme in \
                            a sentence: a governed mind is not a suppressed mind, it is a \
                            re-parented one.",
            context_background: "Romans 8 contrasts two governments of the mind, not two \
                                 levels of effort.",
            application_points: &[
                "Notice which 'government' your default thoughts answer to.",
                "Borrow one of Daniel's practices for one week.",
                "Tell one trusted person where your mind needs renewal.",
            ],
            todays_action: "Pick one verse from this week and set it as a recurring daily reminder.",
            reflection_question: "Whose story of change do you need to stop envying and start learning from?",
        }),
    },
    // Week 3: Dominion in Relationships
    DayTheme {
        title: "Love That Leads",
        scripture_ref: "John 13:34-35",
        scripture_text: "A new command I give you: Love one another. As I have loved you, so \
                         you must love one another.",
        featured: true,
        copy: Some(DayCopy {
            description: "Hours before the cross, Jesus defines His movement's brand: not \
                          doctrine first, not power, but observable love.",
            prayer: "Jesus, let the people nearest me experience the way You have loved me. Amen.",
            full_teaching: "The command is old, love, but the standard is new: as I have \
                            loved you. That measure was set with a towel and a basin, \
                            washing the feet of a betrayer. Week three turns dominion \
                            outward: authority in God's kingdom is validated by how it \
                            treats people, especially those it could ignore.",
            context_background: "Spoken in the upper room after the foot-washing and after \
                                 Judas left; the 'new command' is framed by both.",
            application_points: &[
                "Serve one person today in a way that costs you status.",
                "Let someone interrupt your plans without resentment.",
                "Ask: who would say they feel loved by me this week?",
            ],
            todays_action: "Do one hidden act of service for someone in your household or team.",
            reflection_question: "If love is the credential, what does your leadership currently prove?",
        }),
    },
    DayTheme {
        title: "Forgiveness Sets You Free",
        scripture_ref: "Colossians 3:13",
        scripture_text: "Bear with each other and forgive one another... Forgive as the Lord \
                         forgave you.",
        featured: false,
        copy: Some(DayCopy {
            description: "Unforgiveness feels like a wall protecting you; it is a cell \
                          containing you. The key has been in your hand all along.",
            prayer: "Father, give me the grace to release the debt I keep re-counting. Amen.",
            full_teaching: "Forgiveness is not pretending it didn't happen, trusting again \
                            instantly, or skipping justice. It is cancelling your claim to \
                            collect the debt personally, as the Lord forgave you. It is \
                            rarely one decision; more often a decision renewed each time \
                            the memory returns.",
            context_background: "Colossians addresses a community where Greek, Jew, slave \
                                 and free shared one table; grievances were structural, not \
                                 hypothetical.",
            application_points: &[
                "Name, privately and specifically, the debt you are holding.",
                "Release it in prayer, today's installment, not a final exam.",
                "Decide one kindness toward that person, if safe and wise.",
            ],
            todays_action: "Pray a blessing, by name, over the person you least want to bless.",
            reflection_question: "What has holding this debt been collecting from you?",
        }),
    },
    DayTheme {
        title: "Words That Build",
        scripture_ref: "Ephesians 4:29",
        scripture_text: "Do not let any unwholesome talk come out of your mouths, but only \
                         what is helpful for building others up.",
        featured: false,
        copy: Some(DayCopy {
            description: "Paul treats every sentence as construction material. Today, notice \
                          whether your words are scaffolding or demolition.",
            prayer: "Lord, set a guard over my mouth and make my words useful for building. Amen.",
            full_teaching: "The verse offers a simple filter with three screens: does it \
                            build, does it fit the need of the moment, does it benefit the \
                            hearer? Sarcasm, venting, and 'just being honest' routinely \
                            fail all three. People live in houses made of the words spoken \
                            over them; you are always building something.",
            context_background: "Part of Ephesians' 'old self / new self' clothing imagery; \
                                 speech is listed with stealing and rage as old wardrobe.",
            application_points: &[
                "Go one full day without sarcasm at anyone's expense.",
                "Say one specific, true, building sentence to three people.",
                "Repair one careless remark from this week with a direct apology.",
            ],
            todays_action: "Speak or send three sentences of specific encouragement before tonight.",
            reflection_question: "Whose opinion of themselves is partly a house your words built?",
        }),
    },
    DayTheme {
        title: "Honour in the Home",
        scripture_ref: "Ephesians 6:1-4",
        scripture_text: "Children, obey your parents in the Lord... Fathers, do not \
                         exasperate your children.",
        featured: false,
        copy: None,
    },
    DayTheme {
        title: "Iron Sharpens Iron",
        scripture_ref: "Proverbs 27:17",
        scripture_text: "As iron sharpens iron, so one person sharpens another.",
        featured: false,
        copy: Some(DayCopy {
            description: "Sharpening requires contact, friction, and another piece of iron. \
                          Isolation keeps you comfortable and keeps you dull.",
            prayer: "God, give me friendships honest enough to sharpen me, and humility to stay in them. Amen.",
            full_teaching: "The proverb's image is noisy and uncomfortable, sparks fly when \
                            iron meets iron. Curated distance produces admirers, not \
                            friends; dominion in relationships includes granting a few \
                            people permission to contradict you. The sharpening question is \
                            not whether you have community but whether it has access.",
            context_background: "Proverbs 27 is a cluster of sayings on friendship, including \
                                 'wounds from a friend can be trusted'.",
            application_points: &[
                "Identify who is currently allowed to tell you hard things.",
                "If the answer is no one, ask one person for that permission.",
                "Receive one piece of feedback this week without defending.",
            ],
            todays_action: "Ask a trusted friend one question: 'What is one blind spot you see in me?'",
            reflection_question: "When did you last change your mind because a friend pushed back?",
        }),
    },
    DayTheme {
        title: "Serving Like the King",
        scripture_ref: "Mark 10:45",
        scripture_text: "For even the Son of Man did not come to be served, but to serve, and \
                         to give his life as a ransom for many.",
        featured: false,
        copy: Some(DayCopy {
            description: "The only person who ever held absolute dominion used it to carry a \
                          towel and a cross. That is the model, not the exception.",
            prayer: "Jesus, make my instinct in every room to serve rather than to be served. Amen.",
            full_teaching: "James and John had just requested thrones; Jesus answers with a \
                            job description. In His kingdom, greatness is measured in \
                            downward mobility. This is not the abolition of ambition but \
                            its redirection: aspire, strenuously, to be useful.",
            context_background: "The saying follows the third passion prediction in Mark; \
                                 the disciples argue about rank while Jesus describes a ransom.",
            application_points: &[
                "Take the lowest-status task available to you today, voluntarily.",
                "Serve one person who can do nothing for you in return.",
                "Review your ambitions: which are thrones, which are towels?",
            ],
            todays_action: "Find the task everyone avoids in your home or workplace and do it without announcing it.",
            reflection_question: "Where are you angling for a throne Jesus would hand a towel?",
        }),
    },
    DayTheme {
        title: "Testimony: A Family Restored",
        scripture_ref: "Joel 2:25",
        scripture_text: "I will repay you for the years the locusts have eaten.",
        featured: false,
        copy: Some(DayCopy {
            description: "After seven years of silence between a father and son, restoration \
                          began with a single awkward phone call. Neither man finished it \
                          dry-eyed.",
            prayer: "God of restoration, repay the locust years in my family, starting with me. Amen.",
            full_teaching: "This week's testimony is told by both men, separately, and the \
                            accounts disagree on details in the way true stories do. What \
                            they agree on: the silence was comfortable, the call was not, \
                            and the years since have been repayment with interest. Joel's \
                            promise is not that locusts never come, but that they do not \
                            get the final harvest.",
            context_background: "Joel addresses a nation after literal locust devastation; \
                                 the promise of repayment follows repentance.",
            application_points: &[
                "Name the relationship where silence has become comfortable.",
                "Make the awkward first move; keep it small and honest.",
                "Let restoration take the time it takes.",
            ],
            todays_action: "Send the first message in a relationship you have let go quiet.",
            reflection_question: "Which locust years are you still treating as unrecoverable?",
        }),
    },
    // Week 4: Dominion in Work and Witness
    DayTheme {
        title: "Work as Worship",
        scripture_ref: "Colossians 3:23",
        scripture_text: "Whatever you do, work at it with all your heart, as working for the \
                         Lord, not for human masters.",
        featured: true,
        copy: Some(DayCopy {
            description: "Paul erases the line between sacred and secular labor with one \
                          clause: as working for the Lord. Your desk is an altar.",
            prayer: "Lord, receive today's work, the visible and the invisible, as worship. Amen.",
            full_teaching: "Remarkably, this sentence was first addressed to slaves, people \
                            with the least control over their work. If their labor could be \
                            worship, no job is disqualified. Working 'for the Lord' changes \
                            the audience, and the audience changes the standard: no more \
                            performing for supervisors, no more coasting when unobserved.",
            context_background: "The household codes of Colossians 3 address every role in a \
                                 Roman household, and dignify the lowest first.",
            application_points: &[
                "Begin work today by offering it to God in one sentence.",
                "Do one unobserved task at observed-task quality.",
                "Stop one workplace habit you would not do 'for the Lord'.",
            ],
            todays_action: "Write 'for the Lord' on a note at your workspace and work one full day to that audience.",
            reflection_question: "How would today's work change if your only reviewer were Christ?",
        }),
    },
    DayTheme {
        title: "Integrity in the Small Things",
        scripture_ref: "Proverbs 11:3",
        scripture_text: "The integrity of the upright guides them, but the unfaithful are \
                         destroyed by their duplicity.",
        featured: false,
        copy: None,
    },
    DayTheme {
        title: "Excellence Without Anxiety",
        scripture_ref: "Matthew 6:33",
        scripture_text: "But seek first his kingdom and his righteousness, and all these \
                         things will be given to you as well.",
        featured: false,
        copy: Some(DayCopy {
            description: "Jesus does not lower the bar; He reorders the queue. Seek first, \
                          and the anxieties move to the back of the line.",
            prayer: "Father, re-order my pursuits today so that Your kingdom is actually first. Amen.",
            full_teaching: "The alternative to anxious striving is not lowered standards but \
                            rightly ordered ones. Matthew 6 names the engine of anxiety: \
                            pursuing 'all these things' as if provision were your job \
                            alone. Excellence without anxiety is possible only when the \
                            outcome is in better hands than yours.",
            context_background: "From the Sermon on the Mount, following the birds and lilies, \
                                 examples of provided-for creatures that still work and grow.",
            application_points: &[
                "Start the workday with prayer before email, literally first.",
                "Do your best work on one task, then hand the outcome to God.",
                "Catch one 'what if' spiral and answer it with verse 33.",
            ],
            todays_action: "List your top five current pursuits, then honestly rank where God's kingdom falls.",
            reflection_question: "Which 'all these things' have you promoted to first place?",
        }),
    },
    DayTheme {
        title: "Generosity Breaks Scarcity",
        scripture_ref: "2 Corinthians 9:7",
        scripture_text: "Each of you should give what you have decided in your heart to give, \
                         not reluctantly or under compulsion, for God loves a cheerful giver.",
        featured: false,
        copy: Some(DayCopy {
            description: "Scarcity says hold on; the gospel says open up. Cheerful giving is \
                          how free people prove money is a tool and not a master.",
            prayer: "Generous God, make my giving decided, cheerful, and a little bit daring. Amen.",
            full_teaching: "Paul is raising famine relief and refuses to use guilt, the one \
                            fundraising tool that always works. Instead: decide in your \
                            heart, give from freedom. Generosity is dominion over mammon; \
                            each open-handed act breaks scarcity's narrative that there \
                            will not be enough.",
            context_background: "Chapters 8-9 of 2 Corinthians are the longest sustained \
                                 teaching on giving in the New Testament, anchored in the \
                                 generosity of Christ.",
            application_points: &[
                "Decide a gift in advance, then give it without second-guessing.",
                "Give one thing that is not money: time, skill, or access.",
                "Notice the scarcity story in your head and contradict it once.",
            ],
            todays_action: "Make one unplanned, cheerful gift today, and tell no one.",
            reflection_question: "What does your giving pattern say you actually believe about provision?",
        }),
    },
    DayTheme {
        title: "Sabbath Strength",
        scripture_ref: "Mark 2:27",
        scripture_text: "The Sabbath was made for man, not man for the Sabbath.",
        featured: false,
        copy: Some(DayCopy {
            description: "Rest is not a pause in your dominion; it is an exercise of it. \
                          Only slaves and idols work without ceasing.",
            prayer: "Lord of the Sabbath, teach me to stop as an act of trust, not defeat. Amen.",
            full_teaching: "Sabbath is the weekly declaration that the world can run for a \
                            day without your effort, because it never ran on your effort. \
                            Jesus calls it a gift made for you. Refusing rest is not \
                            devotion; it is a quiet claim to indispensability that the \
                            manna in the wilderness already refuted.",
            context_background: "Spoken while defending hungry disciples who plucked grain; \
                                 Jesus appeals to David and to the Sabbath's original purpose.",
            application_points: &[
                "Block a real rest window this week and defend it like a meeting.",
                "Turn off work notifications for that entire window.",
                "Fill rest with what restores, not what merely distracts.",
            ],
            todays_action: "Schedule your next Sabbath block now, on the calendar, before the week fills it.",
            reflection_question: "What are you afraid would happen if you fully stopped for a day?",
        }),
    },
    DayTheme {
        title: "Salt and Light at Work",
        scripture_ref: "Matthew 5:13-16",
        scripture_text: "You are the salt of the earth... You are the light of the world. A \
                         town built on a hill cannot be hidden.",
        featured: false,
        copy: Some(DayCopy {
            description: "Salt works by contact and light works by visibility. Your \
                          workplace gets both or neither.",
            prayer: "Jesus, make me quietly preserving and unmistakably light where I work. Amen.",
            full_teaching: "Salt in the ancient world preserved what would otherwise rot; \
                            light simply shone and navigation followed. Neither argues. \
                            Witness at work is mostly unspectacular: the person who absorbs \
                            blame accurately, celebrates rivals honestly, and stays when \
                            staying is costly. Hidden discipleship is a contradiction Jesus \
                            names gently: a lamp under a bowl.",
            context_background: "These metaphors immediately follow the Beatitudes; the \
                                 blessed life described there is the salt and light in view.",
            application_points: &[
                "Preserve something today: defend an absent colleague's reputation.",
                "Be visible once: let a decision show what you believe.",
                "Do good so quietly that only the 'Father in heaven' gets credit.",
            ],
            todays_action: "Find one decaying dynamic at work, gossip, cynicism, and be salt in it once.",
            reflection_question: "Would your workplace taste different if you left? How?",
        }),
    },
    DayTheme {
        title: "Testimony: Favour in the Workplace",
        scripture_ref: "Daniel 6:3",
        scripture_text: "Now Daniel so distinguished himself... that the king planned to set \
                         him over the whole kingdom.",
        featured: false,
        copy: None,
    },
    // Week 5: Sent to Reign
    DayTheme {
        title: "Commissioned with Authority",
        scripture_ref: "Matthew 28:18-20",
        scripture_text: "All authority in heaven and on earth has been given to me. Therefore \
                         go and make disciples of all nations.",
        featured: true,
        copy: Some(DayCopy {
            description: "The Great Commission begins with an authority transfer and ends \
                          with a presence promise. The 'go' sits between them.",
            prayer: "Risen King, send me into my ordinary week carrying Your authority and company. Amen.",
            full_teaching: "The campaign's final week gathers everything: identity, mind, \
                            relationships, work, and sends it. Notice the logic: because all \
                            authority is Christ's, therefore go, and behold, He is with \
                            you. You are not sent with delegated strength to a distant \
                            supervisor; you are accompanied. The commission is less a task \
                            list than a travel arrangement.",
            context_background: "Spoken on a Galilean mountain to eleven worshipping, \
                                 doubting disciples, the commission was entrusted to a \
                                 mixed crowd, which should encourage everyone.",
            application_points: &[
                "Identify your 'nations': the rooms only you regularly enter.",
                "Pray for the people in them, by name, this week.",
                "Take one deliberate step of witness where you already stand.",
            ],
            todays_action: "Write down the three 'rooms' you are sent to, and one faithful act for each.",
            reflection_question: "Where have you been waiting for a commissioning you already received?",
        }),
    },
    DayTheme {
        title: "Reigning in Life",
        scripture_ref: "Romans 5:17",
        scripture_text: "...those who receive God's abundant provision of grace... reign in \
                         life through the one man, Jesus Christ.",
        featured: false,
        copy: Some(DayCopy {
            description: "The campaign ends where it began, with dominion as a gift \
                          received, not a prize seized. Those who receive, reign.",
            prayer: "Father, thank You for thirty days of Your word. Keep me receiving, and keep me reigning in life through Jesus. Amen.",
            full_teaching: "Romans 5 stakes everything on a strange verb pairing: receive \
                            and reign. Death reigned through one trespass; grace does \
                            something better than reverse it, it enthrones the forgiven. \
                            Thirty days from now the feelings of this campaign will fade; \
                            the practices, the word in your mouth, the governed mind, the \
                            open hand, the towel, are how receiving continues. Reign on.",
            context_background: "Paul's Adam-Christ contrast: what came through one man is \
                                 overwhelmed by what comes through the Second.",
            application_points: &[
                "Choose the two campaign practices you will keep past day 30.",
                "Tell someone what changed in you this month, specifically.",
                "Put the next campaign date, or a re-read, on your calendar.",
            ],
            todays_action: "Write a short letter to yourself about what these 30 days built, and date it.",
            reflection_question: "What will you still be doing differently ninety days from now?",
        }),
    },
];

/// The full generated campaign set for one sync pass.
#[derive(Debug, Clone)]
pub struct CampaignContent {
    pub sparks: Vec<Spark>,
    pub reflection_cards: Vec<ReflectionCard>,
}

fn publish_at(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(PUBLISH_HOUR_UTC, 0, 0)
        .expect("valid publish hour")
        .and_utc()
}

fn first_sentence(text: &str) -> &str {
    match text.find('.') {
        Some(idx) => &text[..=idx],
        None => text,
    }
}

/// Derive the full spark and reflection-card sets: one of each per
/// (day offset 0..29) x (audience segment). Only day 0 is `published`;
/// later days are `scheduled` and flip live as their publish time passes.
pub fn generate_campaign() -> CampaignContent {
    let start = campaign_start();
    let mut sparks = Vec::with_capacity(EXPECTED_CAMPAIGN_SPARKS);
    let mut reflection_cards = Vec::with_capacity(EXPECTED_CAMPAIGN_SPARKS);

    for (offset, theme) in DAY_THEMES.iter().enumerate() {
        let daily_date = start + Duration::days(offset as i64);
        let publish_at = publish_at(daily_date);
        let week_theme = WEEK_THEMES[offset / 7];
        let status = if offset == 0 {
            SparkStatus::Published
        } else {
            SparkStatus::Scheduled
        };
        let category = if theme.title.contains("Testimony") {
            SparkCategory::Testimony
        } else {
            SparkCategory::DailyDevotional
        };
        let copy = theme.copy.as_ref().unwrap_or(&GENERIC_COPY);

        for segment in AudienceSegment::ALL {
            sparks.push(Spark {
                title: theme.title.to_string(),
                description: copy.description.to_string(),
                category,
                media_type: "audio".to_string(),
                duration_seconds: match category {
                    SparkCategory::Testimony => 540,
                    SparkCategory::DailyDevotional => 420,
                },
                scripture_ref: theme.scripture_ref.to_string(),
                scripture_text: theme.scripture_text.to_string(),
                status,
                publish_at,
                daily_date,
                featured: theme.featured,
                prayer: copy.prayer.to_string(),
                cta_label: match category {
                    SparkCategory::Testimony => "Hear the Story".to_string(),
                    SparkCategory::DailyDevotional => "Listen & Reflect".to_string(),
                },
                thumbnail_text: theme.title.to_string(),
                week_theme: week_theme.to_string(),
                audience_segment: segment,
                full_teaching: copy.full_teaching.to_string(),
                context_background: copy.context_background.to_string(),
                application_points: copy
                    .application_points
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
                todays_action: copy.todays_action.to_string(),
                reflection_question: copy.reflection_question.to_string(),
            });

            reflection_cards.push(ReflectionCard {
                quote: first_sentence(copy.description).trim().to_string(),
                reflection_question: copy.reflection_question.to_string(),
                suggested_action: copy.todays_action.to_string(),
                overlay_ref: theme.scripture_ref.to_string(),
                publish_at,
                daily_date,
                status,
                week_theme: week_theme.to_string(),
                audience_segment: segment,
            });
        }
    }

    CampaignContent {
        sparks,
        reflection_cards,
    }
}

/// Fixed long-form articles; keyed by slug.
pub fn blog_posts() -> Vec<BlogPost> {
    let published = publish_at(campaign_start());
    vec![
        BlogPost {
            slug: "why-dominion-is-not-control".to_string(),
            title: "Why Dominion Is Not Control".to_string(),
            excerpt: "The first thing Scripture says about human authority is who it belongs to."
                .to_string(),
            body: "When Genesis hands humanity dominion, it does so inside a sentence about \
                   image and likeness. Authority detached from that belonging always decays \
                   into control: of outcomes, of people, of God Himself if we could manage \
                   it. This campaign begins by putting the order back. We rule as stewards \
                   of Someone else's estate, which is both a demotion for our egos and a \
                   promotion for our work, because nothing entrusted by God is trivial. \
                   Over the next thirty days we will practice that stewardship in the mind, \
                   the home, and the workplace, one small obedience at a time."
                .to_string(),
            author: "Pastor Jonathan Mensah".to_string(),
            category: "teaching".to_string(),
            published_at: published,
        },
        BlogPost {
            slug: "praying-the-scriptures".to_string(),
            title: "Praying the Scriptures: A Beginner's Guide".to_string(),
            excerpt: "What to do when you do not know what to say: borrow words that have \
                      carried believers for three thousand years."
                .to_string(),
            body: "Each day of the Dominion journey pairs a passage with a short prayer, and \
                   the pairing is the point. Praying the Scriptures means letting the text \
                   set the agenda: read the verse slowly, turn its claims into address, its \
                   commands into requests, its promises into thanksgiving. The Psalms have \
                   worked this way for millennia. Start with today's passage, pray it in \
                   your own words, and notice how different that is from presenting God a \
                   list. The aim is not eloquence but alignment."
                .to_string(),
            author: "Grace Adeyemi".to_string(),
            category: "practice".to_string(),
            published_at: published,
        },
        BlogPost {
            slug: "building-a-rule-of-life".to_string(),
            title: "Building a Rule of Life That Survives February".to_string(),
            excerpt: "Campaigns end. Here is how to turn thirty days of practice into a \
                      sustainable rhythm."
                .to_string(),
            body: "The ancient church called it a rule of life: a small set of committed \
                   rhythms, chosen on purpose, reviewed in community. The Dominion campaign \
                   is designed as scaffolding for one. As the thirty days close, pick two \
                   practices that actually fit your season, not the five you admire, and \
                   attach each to an existing anchor: a commute, a meal, a bedtime. Then \
                   tell one person. Rules of life survive on modesty and company; they die \
                   of ambition and secrecy."
                .to_string(),
            author: "Pastor Jonathan Mensah".to_string(),
            category: "practice".to_string(),
            published_at: published,
        },
        BlogPost {
            slug: "testimony-culture".to_string(),
            title: "Why We Tell Testimonies on Day Seven".to_string(),
            excerpt: "Every week of the campaign ends with a story, on purpose.".to_string(),
            body: "Doctrine tells you what is true; testimony tells you it happened down \
                   the street. Each week of the Dominion journey closes with a member of \
                   our own community telling how the week's theme met their actual life, \
                   with the timelines, setbacks, and unfinished edges left in. We do this \
                   because Revelation says the saints overcome by the blood of the Lamb \
                   and the word of their testimony, and because hope is communicable. If \
                   one of these stories is yours, the team would love to hear it, there is \
                   a day seven waiting for it in the next campaign."
                .to_string(),
            author: "Amara Okafor".to_string(),
            category: "community".to_string(),
            published_at: published,
        },
    ]
}

/// Fixed calendar gatherings for the campaign window.
pub fn events() -> Vec<Event> {
    fn at(date: NaiveDate, hour: u32, duration_hours: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = date
            .and_hms_opt(hour, 0, 0)
            .expect("valid event hour")
            .and_utc();
        (start, start + Duration::hours(duration_hours))
    }

    let start = campaign_start();
    let mut out = Vec::with_capacity(5);

    let (s, e) = at(start, 18, 2);
    out.push(Event {
        title: "Dominion Launch Night".to_string(),
        description: "Worship, vision for the thirty days, and commissioning prayer as the \
                      campaign opens."
            .to_string(),
        event_type: "gathering".to_string(),
        location: "Main Auditorium".to_string(),
        starts_at: s,
        ends_at: e,
    });

    let (s, e) = at(start + Duration::days(7), 7, 2);
    out.push(Event {
        title: "Prayer Breakfast: Renewing the Mind".to_string(),
        description: "An early table with coffee, Scripture, and prayer to open week two's \
                      theme together."
            .to_string(),
        event_type: "prayer".to_string(),
        location: "Fellowship Hall".to_string(),
        starts_at: s,
        ends_at: e,
    });

    let (s, e) = at(start + Duration::days(14), 19, 3);
    out.push(Event {
        title: "Midpoint Worship Night".to_string(),
        description: "An extended evening of worship and testimony at the halfway mark of \
                      the journey."
            .to_string(),
        event_type: "worship".to_string(),
        location: "Main Auditorium".to_string(),
        starts_at: s,
        ends_at: e,
    });

    let (s, e) = at(start + Duration::days(21), 9, 5);
    out.push(Event {
        title: "Community Serve Day".to_string(),
        description: "Week four made practical: teams serving local schools, shelters, and \
                      neighbours."
            .to_string(),
        event_type: "outreach".to_string(),
        location: "Citywide (teams dispatched from Fellowship Hall)".to_string(),
        starts_at: s,
        ends_at: e,
    });

    let (s, e) = at(campaign_end(), 18, 3);
    out.push(Event {
        title: "Dominion Closing Celebration".to_string(),
        description: "Stories from the thirty days, communion, and sending prayer as the \
                      campaign closes."
            .to_string(),
        event_type: "gathering".to_string(),
        location: "Main Auditorium".to_string(),
        starts_at: s,
        ends_at: e,
    });

    out
}

/// Defensive startup check over the static tables. The data is fixed, so a
/// failure here is a programming error and should stop the process early.
pub fn validate_tables() -> Result<()> {
    if DAY_THEMES.len() != CAMPAIGN_DAYS {
        bail!(
            "day-theme table has {} entries, expected {}",
            DAY_THEMES.len(),
            CAMPAIGN_DAYS
        );
    }
    if AudienceSegment::ALL.is_empty() {
        bail!("audience segment list is empty");
    }

    let mut titles = HashSet::new();
    for theme in &DAY_THEMES {
        if theme.title.trim().is_empty() {
            bail!("day theme with empty title");
        }
        if theme.scripture_ref.trim().is_empty() || theme.scripture_text.trim().is_empty() {
            bail!("day theme '{}' missing scripture", theme.title);
        }
        if !titles.insert(theme.title) {
            bail!("duplicate day theme title '{}'", theme.title);
        }
    }

    let mut slugs = HashSet::new();
    for post in blog_posts() {
        if !slugs.insert(post.slug.clone()) {
            bail!("duplicate blog post slug '{}'", post.slug);
        }
    }

    let mut event_titles = HashSet::new();
    for event in events() {
        if event.ends_at <= event.starts_at {
            bail!("event '{}' ends before it starts", event.title);
        }
        if !event_titles.insert(event.title.clone()) {
            bail!("duplicate event title '{}'", event.title);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tables_are_valid() {
        validate_tables().unwrap();
    }

    #[test]
    fn campaign_cardinality() {
        let content = generate_campaign();
        assert_eq!(content.sparks.len(), 180);
        assert_eq!(content.reflection_cards.len(), 30 * 6);
    }

    #[test]
    fn only_first_day_is_published() {
        let content = generate_campaign();
        let start = campaign_start();
        for spark in &content.sparks {
            let expected = if spark.daily_date == start {
                SparkStatus::Published
            } else {
                SparkStatus::Scheduled
            };
            assert_eq!(spark.status, expected, "spark {}", spark.title);
        }
        let published = content
            .sparks
            .iter()
            .filter(|s| s.status == SparkStatus::Published)
            .count();
        assert_eq!(published, 6);
        let published_cards = content
            .reflection_cards
            .iter()
            .filter(|c| c.status == SparkStatus::Published)
            .count();
        assert_eq!(published_cards, 6);
    }

    #[test]
    fn testimony_titles_get_testimony_category() {
        let content = generate_campaign();
        let testimony = content
            .sparks
            .iter()
            .find(|s| s.title == "Testimony: From Pressure to Peace")
            .unwrap();
        assert_eq!(testimony.category, SparkCategory::Testimony);

        let devotional = content
            .sparks
            .iter()
            .find(|s| s.title == "Dominion Begins with Belonging")
            .unwrap();
        assert_eq!(devotional.category, SparkCategory::DailyDevotional);
    }

    #[test]
    fn dates_are_deterministic() {
        let content = generate_campaign();
        let day5 = content
            .sparks
            .iter()
            .find(|s| s.daily_date == campaign_start() + Duration::days(5))
            .unwrap();
        assert_eq!(day5.daily_date.to_string(), "2026-01-08");
        assert_eq!(day5.publish_at.to_rfc3339(), "2026-01-08T05:00:00+00:00");
    }

    #[test]
    fn missing_copy_falls_back_to_generic() {
        let content = generate_campaign();
        // "Honour in the Home" ships without editorial copy.
        let spark = content
            .sparks
            .iter()
            .find(|s| s.title == "Honour in the Home")
            .unwrap();
        assert!(!spark.description.is_empty());
        assert!(!spark.prayer.is_empty());
        assert!(!spark.full_teaching.is_empty());
        assert!(!spark.application_points.is_empty());
        assert_eq!(spark.description, GENERIC_COPY.description);
    }

    #[test]
    fn no_duplicate_natural_keys() {
        let content = generate_campaign();
        let mut spark_keys = HashSet::new();
        for s in &content.sparks {
            assert!(
                spark_keys.insert((s.title.clone(), s.daily_date, s.audience_segment)),
                "duplicate spark key for {} {}",
                s.title,
                s.daily_date
            );
        }
        let mut card_keys = HashSet::new();
        for c in &content.reflection_cards {
            assert!(card_keys.insert((c.daily_date, c.audience_segment)));
        }
    }

    #[test]
    fn week_themes_cover_all_offsets() {
        let content = generate_campaign();
        let last = content.sparks.last().unwrap();
        assert_eq!(last.week_theme, WEEK_THEMES[4]);
        let first = content.sparks.first().unwrap();
        assert_eq!(first.week_theme, WEEK_THEMES[0]);
    }

    #[test]
    fn fixed_sets_have_expected_sizes() {
        assert_eq!(blog_posts().len(), 4);
        assert_eq!(events().len(), 5);
    }

    #[test]
    fn reflection_quote_is_first_sentence() {
        let content = generate_campaign();
        let card = content
            .reflection_cards
            .iter()
            .find(|c| c.daily_date == campaign_start())
            .unwrap();
        assert!(card.quote.ends_with('.'));
        assert!(card.quote.len() < 200);
    }
}
