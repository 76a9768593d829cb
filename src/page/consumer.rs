//!Consumer Devices usage page (0x0C)

use packed_struct::prelude::*;

/// Consumer control usage codes
///
/// Drawn from the Consumer page of the [HID Usage Tables](<https://www.usb.org/sites/default/files/hut1_21.pdf>).
/// Reserved ranges have no variant; a raw code in such a range has no
/// `Consumer` representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PrimitiveEnum_u16)]
pub enum Consumer {
    Unassigned = 0x00,
    ConsumerControl = 0x01,
    NumericKeyPad = 0x02,
    ProgrammableButtons = 0x03,
    Microphone = 0x04,
    Headphone = 0x05,
    GraphicEqualizer = 0x06,
    //0x07-0x1F Reserved
    Plus10 = 0x20,
    Plus100 = 0x21,
    AmPm = 0x22,
    //0x23-0x2F Reserved
    Power = 0x30,
    Reset = 0x31,
    Sleep = 0x32,
    SleepAfter = 0x33,
    SleepMode = 0x34,
    Illumination = 0x35,
    FunctionButtons = 0x36,
    //0x37-0x3F Reserved
    Menu = 0x40,
    MenuPick = 0x41,
    MenuUp = 0x42,
    MenuDown = 0x43,
    MenuLeft = 0x44,
    MenuRight = 0x45,
    MenuEscape = 0x46,
    MenuValueIncrease = 0x47,
    MenuValueDecrease = 0x48,
    //0x49-0x5F Reserved
    DataOnScreen = 0x60,
    ClosedCaption = 0x61,
    ClosedCaptionSelect = 0x62,
    VcrTv = 0x63,
    BroadcastMode = 0x64,
    Snapshot = 0x65,
    Still = 0x66,
    //0x67-0x7F Reserved
    Selection = 0x80,
    AssignSelection = 0x81,
    ModeStep = 0x82,
    RecallLast = 0x83,
    EnterChannel = 0x84,
    OrderMovie = 0x85,
    Channel = 0x86,
    MediaSelection = 0x87,
    MediaSelectComputer = 0x88,
    MediaSelectTV = 0x89,
    MediaSelectWWW = 0x8A,
    MediaSelectDVD = 0x8B,
    MediaSelectTelephone = 0x8C,
    MediaSelectProgramGuide = 0x8D,
    MediaSelectVideoPhone = 0x8E,
    MediaSelectGames = 0x8F,
    MediaSelectMessages = 0x90,
    MediaSelectCD = 0x91,
    MediaSelectVCR = 0x92,
    MediaSelectTuner = 0x93,
    Quit = 0x94,
    Help = 0x95,
    MediaSelectTape = 0x96,
    MediaSelectCable = 0x97,
    MediaSelectSatellite = 0x98,
    MediaSelectSecurity = 0x99,
    MediaSelectHome = 0x9A,
    MediaSelectCall = 0x9B,
    ChannelIncrement = 0x9C,
    ChannelDecrement = 0x9D,
    MediaSelectSAP = 0x9E,
    //0x9F Reserved
    VCRPlus = 0xA0,
    Once = 0xA1,
    Daily = 0xA2,
    Weekly = 0xA3,
    Monthly = 0xA4,
    //0xA5-0xAF Reserved
    Play = 0xB0,
    Pause = 0xB1,
    Record = 0xB2,
    FastForward = 0xB3,
    Rewind = 0xB4,
    ScanNextTrack = 0xB5,
    ScanPreviousTrack = 0xB6,
    Stop = 0xB7,
    Eject = 0xB8,
    RandomPlay = 0xB9,
    SelectDisc = 0xBA,
    EnterDisc = 0xBB,
    Repeat = 0xBC,
    Tracking = 0xBD,
    TrackNormal = 0xBE,
    SlowTracking = 0xBF,
    FrameForward = 0xC0,
    FrameBack = 0xC1,
    Mark = 0xC2,
    ClearMark = 0xC3,
    RepeatFromMark = 0xC4,
    ReturnToMark = 0xC5,
    SearchMarkForward = 0xC6,
    SearchMarkBackwards = 0xC7,
    CounterReset = 0xC8,
    ShowCounter = 0xC9,
    TrackingIncrement = 0xCA,
    TrackingDecrement = 0xCB,
    StopEject = 0xCC,
    PlayPause = 0xCD,
    PlaySkip = 0xCE,
    //0xCF-0xDF Reserved
    Volume = 0xE0,
    Balance = 0xE1,
    Mute = 0xE2,
    Bass = 0xE3,
    Treble = 0xE4,
    BassBoost = 0xE5,
    SurroundMode = 0xE6,
    Loudness = 0xE7,
    MPX = 0xE8,
    VolumeIncrement = 0xE9,
    VolumeDecrement = 0xEA,
    //0xEB-0xEF Reserved
    SpeedSelect = 0xF0,
    PlaybackSpeed = 0xF1,
    StandardPlay = 0xF2,
    LongPlay = 0xF3,
    ExtendedPlay = 0xF4,
    Slow = 0xF5,
    //0xF6-0xFF Reserved
    FanEnable = 0x100,
    FanSpeed = 0x101,
    LightEnable = 0x102,
    LightIlluminationLevel = 0x103,
    ClimateControlEnable = 0x104,
    RoomTemperature = 0x105,
    SecurityEnable = 0x106,
    FireAlarm = 0x107,
    PoliceAlarm = 0x108,
    Proximity = 0x109,
    Motion = 0x10A,
    DuressAlarm = 0x10B,
    HoldupAlarm = 0x10C,
    MedicalAlarm = 0x10D,
    //0x10E-0x14F Reserved
    BalanceRight = 0x150,
    BalanceLeft = 0x151,
    BassIncrement = 0x152,
    BassDecrement = 0x153,
    TrebleIncrement = 0x154,
    TrebleDecrement = 0x155,
    //0x156-0x15F Reserved
    SpeakerSystem = 0x160,
    ChannelLeft = 0x161,
    ChannelRight = 0x162,
    ChannelCenter = 0x163,
    ChannelFront = 0x164,
    ChannelCenterFront = 0x165,
    ChannelSide = 0x166,
    ChannelSurround = 0x167,
    ChannelLowFrequencyEnhancement = 0x168,
    ChannelTop = 0x169,
    ChannelUnknown = 0x16A,
    //0x16B-0x16F Reserved
    SubChannel = 0x170,
    SubChannelIncrement = 0x171,
    SubChannelDecrement = 0x172,
    AlternateAudioIncrement = 0x173,
    AlternateAudioDecrement = 0x174,
    //0x175-0x17F Reserved
    ApplicationLaunchButtons = 0x180,
    ALLaunchButtonConfigurationTool = 0x181,
    ALProgrammableButtonConfiguration = 0x182,
    ALConsumerControlConfiguration = 0x183,
    ALWordProcessor = 0x184,
    ALTextEditor = 0x185,
    ALSpreadsheet = 0x186,
    ALGraphicsEditor = 0x187,
    ALPresentationApp = 0x188,
    ALDatabaseApp = 0x189,
    ALEmailReader = 0x18A,
    ALNewsreader = 0x18B,
    ALVoicemail = 0x18C,
    ALContactsAddressBook = 0x18D,
    ALCalendarSchedule = 0x18E,
    ALTaskProjectManager = 0x18F,
    ALLogJournalTimecard = 0x190,
    ALCheckbookFinance = 0x191,
    ALCalculator = 0x192,
    ALAvCapturePlayback = 0x193,
    ALLocalMachineBrowser = 0x194,
    ALLanWanBrowser = 0x195,
    ALInternetBrowser = 0x196,
    ALRemoteNetworkingISPConnect = 0x197,
    ALNetworkConference = 0x198,
    ALNetworkChat = 0x199,
    ALTelephonyDialer = 0x19A,
    ALLogon = 0x19B,
    ALLogoff = 0x19C,
    ALLogonLogoff = 0x19D,
    ALTerminalLockScreensaver = 0x19E,
    ALControlPanel = 0x19F,
    ALCommandLineProcessorRun = 0x1A0,
    ALProcessTaskManager = 0x1A1,
    ALSelectTaskApplication = 0x1A2,
    ALNextTaskApplication = 0x1A3,
    ALPreviousTaskApplication = 0x1A4,
    ALPreemptiveHaltTaskApplication = 0x1A5,
    ALIntegratedHelpCenter = 0x1A6,
    ALDocuments = 0x1A7,
    ALThesaurus = 0x1A8,
    ALDictionary = 0x1A9,
    ALDesktop = 0x1AA,
    ALSpellCheck = 0x1AB,
    ALGrammarCheck = 0x1AC,
    ALWirelessStatus = 0x1AD,
    ALKeyboardLayout = 0x1AE,
    ALVirusProtection = 0x1AF,
    ALEncryption = 0x1B0,
    ALScreenSaver = 0x1B1,
    ALAlarms = 0x1B2,
    ALClock = 0x1B3,
    ALFileBrowser = 0x1B4,
    ALPowerStatus = 0x1B5,
    ALImageBrowser = 0x1B6,
    ALAudioBrowser = 0x1B7,
    ALMovieBrowser = 0x1B8,
    ALDigitalRightsManager = 0x1B9,
    ALDigitalWallet = 0x1BA,
    //0x1BB Reserved
    ALInstantMessaging = 0x1BC,
    ALOemFeaturesTipsTutorialBrowser = 0x1BD,
    ALOemHelp = 0x1BE,
    ALOnlineCommunity = 0x1BF,
    ALEntertainmentContentBrowser = 0x1C0,
    ALOnlineShoppingBrowser = 0x1C1,
    ALSmartCardInformationHelp = 0x1C2,
    ALMarketMonitorFinanceBrowser = 0x1C3,
    ALCustomizedCorporateNewsBrowser = 0x1C4,
    ALOnlineActivityBrowser = 0x1C5,
    ALResearchSearchBrowser = 0x1C6,
    ALAudioPlayer = 0x1C7,
    //0x1C8-0x1FF Reserved
    GenericGUIApplicationControls = 0x200,
    ACNew = 0x201,
    ACOpen = 0x202,
    ACClose = 0x203,
    ACExit = 0x204,
    ACMaximize = 0x205,
    ACMinimize = 0x206,
    ACSave = 0x207,
    ACPrint = 0x208,
    ACProperties = 0x209,
    ACUndo = 0x21A,
    ACCopy = 0x21B,
    ACCut = 0x21C,
    ACPaste = 0x21D,
    ACSelectAll = 0x21E,
    ACFind = 0x21F,
    ACFindAndReplace = 0x220,
    ACSearch = 0x221,
    ACGoTo = 0x222,
    ACHome = 0x223,
    ACBack = 0x224,
    ACForward = 0x225,
    ACStop = 0x226,
    ACRefresh = 0x227,
    ACPreviousLink = 0x228,
    ACNextLink = 0x229,
    ACBookmarks = 0x22A,
    ACHistory = 0x22B,
    ACSubscriptions = 0x22C,
    ACZoomIn = 0x22D,
    ACZoomOut = 0x22E,
    ACZoom = 0x22F,
    ACFullScreenView = 0x230,
    ACNormalView = 0x231,
    ACViewToggle = 0x232,
    ACScrollUp = 0x233,
    ACScrollDown = 0x234,
    ACScroll = 0x235,
    ACPanLeft = 0x236,
    ACPanRight = 0x237,
    ACPan = 0x238,
    ACNewWindow = 0x239,
    ACTileHorizontally = 0x23A,
    ACTileVertically = 0x23B,
    ACFormat = 0x23C,
    ACEdit = 0x23D,
    ACBold = 0x23E,
    ACItalics = 0x23F,
    ACUnderline = 0x240,
    ACStrikethrough = 0x241,
    ACSubscript = 0x242,
    ACSuperscript = 0x243,
    ACAllCaps = 0x244,
    ACRotate = 0x245,
    ACResize = 0x246,
    ACFlipHorizontal = 0x247,
    ACFlipVertical = 0x248,
    ACMirrorHorizontal = 0x249,
    ACMirrorVertical = 0x24A,
    ACFontSelect = 0x24B,
    ACFontColor = 0x24C,
    ACFontSize = 0x24D,
    ACJustifyLeft = 0x24E,
    ACJustifyCenterH = 0x24F,
    ACJustifyRight = 0x250,
    ACJustifyBlockH = 0x251,
    ACJustifyTop = 0x252,
    ACJustifyCenterV = 0x253,
    ACJustifyBottom = 0x254,
    ACJustifyBlockV = 0x255,
    ACIndentDecrease = 0x256,
    ACIndentIncrease = 0x257,
    ACNumberedList = 0x258,
    ACRestartNumbering = 0x259,
    ACBulletedList = 0x25A,
    ACPromote = 0x25B,
    ACDemote = 0x25C,
    ACYes = 0x25D,
    ACNo = 0x25E,
    ACCancel = 0x25F,
    ACCatalog = 0x260,
    ACBuyCheckout = 0x261,
    ACAddToCart = 0x262,
    ACExpand = 0x263,
    ACExpandAll = 0x264,
    ACCollapse = 0x265,
    ACCollapseAll = 0x266,
    ACPrintPreview = 0x267,
    ACPasteSpecial = 0x268,
    ACInsertMode = 0x269,
    ACDelete = 0x26A,
    ACLock = 0x26B,
    ACUnlock = 0x26C,
    ACProtect = 0x26D,
    ACUnprotect = 0x26E,
    ACAttachComment = 0x26F,
    ACDeleteComment = 0x270,
    ACViewComment = 0x271,
    ACSelectWord = 0x272,
    ACSelectSentence = 0x273,
    ACSelectParagraph = 0x274,
    ACSelectColumn = 0x275,
    ACSelectRow = 0x276,
    ACSelectTable = 0x277,
    ACSelectObject = 0x278,
    ACRedoRepeat = 0x279,
    ACSort = 0x27A,
    ACSortAscending = 0x27B,
    ACSortDescending = 0x27C,
    ACFilter = 0x27D,
    ACSetClock = 0x27E,
    ACViewClock = 0x27F,
    ACSelectTimeZone = 0x280,
    ACEditTimeZones = 0x281,
    ACSetAlarm = 0x282,
    ACClearAlarm = 0x283,
    ACSnoozeAlarm = 0x284,
    ACResetAlarm = 0x285,
    ACSynchronize = 0x286,
    ACSendReceive = 0x287,
    ACSendTo = 0x288,
    ACReply = 0x289,
    ACReplyAll = 0x28A,
    ACForwardMsg = 0x28B,
    ACSend = 0x28C,
    ACAttachFile = 0x28D,
    ACUpload = 0x28E,
    ACDownloadSaveTargetAs = 0x28F,
    ACSetBorders = 0x290,
    ACInsertRow = 0x291,
    ACInsertColumn = 0x292,
    ACInsertFile = 0x293,
    ACInsertPicture = 0x294,
    ACInsertObject = 0x295,
    ACInsertSymbol = 0x296,
    ACSaveAndClose = 0x297,
    ACRename = 0x298,
    ACMerge = 0x299,
    ACSplit = 0x29A,
    ACDistributeHorizontally = 0x29B,
    ACDistributeVertically = 0x29C,
    //0x29D-0xFFFF Reserved
}
