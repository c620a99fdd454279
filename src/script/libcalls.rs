//! Library call name table for `OP_LIBCALL`'s argument (spec §4.4). Index
//! `i` names the library function invoked by `libcall i`; several entries
//! are themselves labelled `UNKNOWN_xxh` in the original engine and are
//! kept verbatim rather than renamed.

pub const LIB_CALLS: &[&str] = &[
    "NOFUNCTION", "ACTORBRIGHTNESS", "ACTORDIRECTION", "ACTORPRIORITY", "ACTORREF",
    "ACTORRGB", "ACTORXPOS", "ACTORYPOS", "ADDNOTEBOOK", "ADDCONV", "ADDHIGHLIGHT",
    "ADDINV8_T3", "ADDINV1", "ADDINV2", "ADDINV7_T3", "ADDINV4_T3", "ADDINV3_T3",
    "ADDTOPIC", "BACKGROUND", "BLOCKING", "UNKNOWN_14h", "CALLACTOR",
    "CALLGLOBALPROCESS", "CALLOBJECT", "CALLPROCESS", "CALLSCENE", "CALLTAG",
    "CAMERA", "CDCHANGESCENE", "CDDOCHANGE", "CDENDACTOR", "CDLOAD", "CDPLAY",
    "UNKNOWN_21h", "CLEARHOOKSCENE", "CLOSEINVENTORY", "CLOSEINVENTORY_24h",
    "CONTROL", "CONVERSATION", "UNKNOWN_27h", "CURSOR", "CURSORXPOS", "CURSORYPOS",
    "DECINVMAIN", "DECINV2", "DECLARELANGUAGE", "DECLEAD", "DEC3D", "DECTAGFONT",
    "DECTALKFONT", "DELTOPIC", "UNKNOWN_33h", "DIMMUSIC", "DROP", "DROPEVERYTHING",
    "DROPOUT", "EFFECTACTOR", "ENABLEMENU", "ENDACTOR", "ESCAPEOFF", "ESCAPEON",
    "EVENT", "FACETAG", "FADEIN", "FADEMUSIC_T3", "FADEOUT", "FRAMEGRAB",
    "FREEZECURSOR", "GETINVLIMIT", "GHOST", "GLOBALVAR", "GRABMOVIE", "HAILSCENE",
    "HASRESTARTED", "HAVE", "HELDOBJECT?", "HELDOBJECT2?", "HIDEACTOR", "HIDEBLOCK",
    "HIDEEFFECT", "HIDEPATH", "HIDEREFER", "HIDE_UNKNOWN_T3", "HIDETAG", "HOLD",
    "HOOKSCENE", "HYPERLINK_T3", "IDLETIME", "INSTANTSCROLL", "INVENTORY",
    "INVPLAY", "INWHICHINV", "KILLACTOR", "KILLGLOBALPROCESS", "KILLPROCESS",
    "LOCALVAR", "MOVECURSOR", "MOVETAG", "MOVETAGTO", "NEWSCENE", "NOBLOCKING",
    "NOPAUSE", "NOSCROLL", "UNKNOWN_67h", "OFFSET", "INVENTORY4_T3",
    "INVENTORY3_T3", "OTHEROBJECT", "PAUSE", "HOLD_T3?", "PLAY", "PLAYMOVIE",
    "PLAYMUSIC", "PLAYSAMPLE", "POINTACTOR", "POINTTAG", "POSTACTOR",
    "UNKNOWN75h", "POSTGLOBALPROCESS", "POSTOBJECT", "POSTPROCESS", "POSTTAG",
    "PREPAREMOVIE", "PRINT", "PRINTCURSOR", "PRINTOBJ", "PRINTTAG", "QUITGAME",
    "RANDOM", "RESETIDLETIME", "RESTARTGAME", "RESTORESCENE", "RESUMELASTGAME",
    "RUNMODE", "SAVESCENE", "SAY", "SAYAT", "SCREENXPOS", "SCREENYPOS", "SCOLL",
    "SCROLLPARAMETERS", "SENDACTOR", "SENDGLOBALPROCESS", "SENDOBJECT",
    "SENDPROCESS", "SENDTAG", "SETBRIGHTNESS", "SETINVLIMIT", "SETINVSIZE",
    "SETLANGUAGE", "UNKNOWN_96h", "SETSYSTEMREEL", "SETSYSTEMSTRING",
    "SETSYSTEMVAR", "SETVIEW_T3", "SHELL", "SHOWACTOR", "SHOWBLOCK",
    "SHOWEFFECT", "SHOWMENU", "SHOWPATH", "SHOWREFER", "SHOW_UNKNOWN",
    "SHOWTAG", "STAND", "STANDTAG", "STARTGLOBALPROCESS", "STARTPROCESS",
    "STARTTIMER", "STOPALLSAMPLES", "STOPSAMPLE", "STOPWALK", "SUBTITLES",
    "SWALK", "SWALKZ", "SYSTEMVAR", "TAGTAGXPOS", "TAGTAGYPOS", "TAGWALKXPOS",
    "TAGWALKYPOS", "TALK", "TALKAT", "TALKRGB", "TALKVIA", "TEMPTAGFONT",
    "TEMPTALKFONT", "THISOBJECT", "THISTAG", "TIMER", "TOPIC", "TOPPLAY",
    "TOPWINDOW", "UNDIMMUSIC", "UNHOOKSCENE", "WAITFRAME", "WAITKEY",
    "WAITSCROLL", "WAITTIME", "WALK", "WALKED", "WALKEDPOLY", "WALKEDTAG",
    "WALKINGACTOR", "WALKPOLY", "WALKTAG", "WALKXPOS", "WALKYPOS", "WHICHCD",
    "WHICHINVENTORY", "ZZZZZZ", "NTBPOLYENTRY", "PLAYSEQUENCE",
    "NTBPOLYPREVPAGE", "NTBPOLYNEXTPAGE", "SET3DTEXTURE_T3", "UNKNOWN_D7h",
    "UNKNOWN_D8h", "VOICEOVER", "TALK_DAh", "TALK_DBh", "TALK_DCh", "SAY_DDh",
    "SAY_DEh", "SAY_DFh", "LOAD3DOVERLAY", "PLAYMOVIEu_T3", "WAITSPRITER",
    "UNKNOWN_E3h", "UNKNOWN_E4h", "UNKNOWN_E5h", "UNKNOWN_E6h",
];

/// Resolves a `libcall` argument to its name, or a synthesized
/// `LIBCALL_<n>` label if the argument falls outside the known table (the
/// original engine indexes this array unchecked; this crate tolerates
/// out-of-range indices instead of panicking).
pub fn name(index: u32) -> String {
    match LIB_CALLS.get(index as usize) {
        Some(name) => name.to_string(),
        None => format!("LIBCALL_{index}"),
    }
}
