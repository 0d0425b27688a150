/// Emoji names with their surrounding colons, as the server's emoji extension recognises them.
pub const EMOJIS: &[&str] = &[
    ":+1:",
    ":-1:",
    ":100:",
    ":1234:",
    ":8ball:",
    ":a:",
    ":ab:",
    ":abc:",
    ":airplane:",
    ":alarm_clock:",
    ":alien:",
    ":ambulance:",
    ":anchor:",
    ":angel:",
    ":anger:",
    ":angry:",
    ":anguished:",
    ":ant:",
    ":apple:",
    ":aquarius:",
    ":aries:",
    ":arrow_down:",
    ":arrow_left:",
    ":arrow_right:",
    ":arrow_up:",
    ":art:",
    ":astonished:",
    ":athletic_shoe:",
    ":atm:",
    ":baby:",
    ":baby_chick:",
    ":balloon:",
    ":bamboo:",
    ":banana:",
    ":bank:",
    ":bar_chart:",
    ":baseball:",
    ":basketball:",
    ":bath:",
    ":battery:",
    ":bear:",
    ":beer:",
    ":beers:",
    ":beetle:",
    ":beginner:",
    ":bell:",
    ":bento:",
    ":bicyclist:",
    ":bike:",
    ":bird:",
    ":birthday:",
    ":black_heart:",
    ":blossom:",
    ":blue_heart:",
    ":blush:",
    ":boat:",
    ":bomb:",
    ":book:",
    ":bookmark:",
    ":books:",
    ":boom:",
    ":boot:",
    ":bouquet:",
    ":bow:",
    ":bowling:",
    ":boy:",
    ":bread:",
    ":bride_with_veil:",
    ":bridge_at_night:",
    ":briefcase:",
    ":broken_heart:",
    ":bug:",
    ":bulb:",
    ":bus:",
    ":cactus:",
    ":cake:",
    ":calendar:",
    ":calling:",
    ":camel:",
    ":camera:",
    ":cancer:",
    ":candy:",
    ":car:",
    ":card_index:",
    ":cat:",
    ":cd:",
    ":chart_with_downwards_trend:",
    ":chart_with_upwards_trend:",
    ":checkered_flag:",
    ":cherries:",
    ":cherry_blossom:",
    ":chestnut:",
    ":chicken:",
    ":children_crossing:",
    ":chocolate_bar:",
    ":christmas_tree:",
    ":clap:",
    ":clapper:",
    ":clipboard:",
    ":clock1:",
    ":closed_book:",
    ":cloud:",
    ":clubs:",
    ":cocktail:",
    ":coffee:",
    ":cold_sweat:",
    ":computer:",
    ":confetti_ball:",
    ":confounded:",
    ":confused:",
    ":construction:",
    ":cookie:",
    ":cool:",
    ":cop:",
    ":corn:",
    ":couple:",
    ":cow:",
    ":crab:",
    ":credit_card:",
    ":crescent_moon:",
    ":crown:",
    ":cry:",
    ":crying_cat_face:",
    ":crystal_ball:",
    ":cupid:",
    ":curly_loop:",
    ":dancer:",
    ":dart:",
    ":dash:",
    ":date:",
    ":deciduous_tree:",
    ":department_store:",
    ":diamonds:",
    ":disappointed:",
    ":dizzy:",
    ":dizzy_face:",
    ":dog:",
    ":dollar:",
    ":dolphin:",
    ":door:",
    ":doughnut:",
    ":dragon:",
    ":dress:",
    ":droplet:",
    ":ear:",
    ":earth_africa:",
    ":egg:",
    ":eggplant:",
    ":eight:",
    ":email:",
    ":envelope:",
    ":euro:",
    ":evergreen_tree:",
    ":exclamation:",
    ":expressionless:",
    ":eyeglasses:",
    ":eyes:",
    ":facepunch:",
    ":factory:",
    ":fallen_leaf:",
    ":family:",
    ":fast_forward:",
    ":fax:",
    ":fearful:",
    ":feet:",
    ":ferris_wheel:",
    ":file_folder:",
    ":fire:",
    ":fire_engine:",
    ":fireworks:",
    ":first_quarter_moon:",
    ":fish:",
    ":fist:",
    ":five:",
    ":flags:",
    ":flashlight:",
    ":floppy_disk:",
    ":flushed:",
    ":football:",
    ":fork_and_knife:",
    ":fountain:",
    ":four:",
    ":four_leaf_clover:",
    ":fries:",
    ":frog:",
    ":frowning:",
    ":fuelpump:",
    ":full_moon:",
    ":game_die:",
    ":gem:",
    ":gemini:",
    ":ghost:",
    ":gift:",
    ":gift_heart:",
    ":girl:",
    ":globe_with_meridians:",
    ":goat:",
    ":golf:",
    ":grapes:",
    ":green_apple:",
    ":green_heart:",
    ":grey_exclamation:",
    ":grey_question:",
    ":grimacing:",
    ":grin:",
    ":grinning:",
    ":guardsman:",
    ":guitar:",
    ":gun:",
    ":haircut:",
    ":hamburger:",
    ":hammer:",
    ":hamster:",
    ":hand:",
    ":handbag:",
    ":hankey:",
    ":hash:",
    ":hatched_chick:",
    ":headphones:",
    ":hear_no_evil:",
    ":heart:",
    ":heart_eyes:",
    ":heartbeat:",
    ":heavy_check_mark:",
    ":heavy_minus_sign:",
    ":heavy_plus_sign:",
    ":helicopter:",
    ":herb:",
    ":hibiscus:",
    ":high_heel:",
    ":hocho:",
    ":honey_pot:",
    ":horse:",
    ":hospital:",
    ":hotel:",
    ":hourglass:",
    ":house:",
    ":hushed:",
    ":ice_cream:",
    ":icecream:",
    ":id:",
    ":imp:",
    ":inbox_tray:",
    ":information_source:",
    ":innocent:",
    ":iphone:",
    ":jack_o_lantern:",
    ":japan:",
    ":jeans:",
    ":joy:",
    ":joy_cat:",
    ":key:",
    ":keyboard:",
    ":kiss:",
    ":kissing:",
    ":koala:",
    ":koko:",
    ":label:",
    ":lantern:",
    ":laughing:",
    ":leaves:",
    ":ledger:",
    ":lemon:",
    ":leo:",
    ":leopard:",
    ":libra:",
    ":link:",
    ":lips:",
    ":lipstick:",
    ":lock:",
    ":lollipop:",
    ":loop:",
    ":loudspeaker:",
    ":love_letter:",
    ":mag:",
    ":mailbox:",
    ":man:",
    ":mans_shoe:",
    ":maple_leaf:",
    ":mask:",
    ":massage:",
    ":meat_on_bone:",
    ":mega:",
    ":memo:",
    ":metro:",
    ":microphone:",
    ":microscope:",
    ":milky_way:",
    ":minibus:",
    ":moneybag:",
    ":monkey:",
    ":monkey_face:",
    ":moon:",
    ":mortar_board:",
    ":mount_fuji:",
    ":mountain_bicyclist:",
    ":mouse:",
    ":movie_camera:",
    ":muscle:",
    ":mushroom:",
    ":musical_note:",
    ":musical_score:",
    ":mute:",
    ":nail_care:",
    ":necktie:",
    ":negative_squared_cross_mark:",
    ":neutral_face:",
    ":new:",
    ":newspaper:",
    ":night_with_stars:",
    ":no_entry:",
    ":no_good:",
    ":nose:",
    ":notebook:",
    ":notes:",
    ":nut_and_bolt:",
    ":o:",
    ":ocean:",
    ":octopus:",
    ":ok:",
    ":ok_hand:",
    ":ok_woman:",
    ":older_man:",
    ":on:",
    ":open_book:",
    ":open_file_folder:",
    ":open_hands:",
    ":open_mouth:",
    ":orange_book:",
    ":outbox_tray:",
    ":ox:",
    ":package:",
    ":page_facing_up:",
    ":palm_tree:",
    ":panda_face:",
    ":paperclip:",
    ":parking:",
    ":partly_sunny:",
    ":passport_control:",
    ":paw_prints:",
    ":peach:",
    ":pear:",
    ":pencil2:",
    ":penguin:",
    ":pensive:",
    ":performing_arts:",
    ":persevere:",
    ":phone:",
    ":pig:",
    ":pill:",
    ":pineapple:",
    ":pisces:",
    ":pizza:",
    ":point_down:",
    ":point_left:",
    ":point_right:",
    ":point_up:",
    ":pouting_cat:",
    ":pray:",
    ":pushpin:",
    ":question:",
    ":rabbit:",
    ":racehorse:",
    ":radio:",
    ":rage:",
    ":railway_car:",
    ":rainbow:",
    ":raised_hands:",
    ":ram:",
    ":ramen:",
    ":rat:",
    ":recycle:",
    ":red_circle:",
    ":registered:",
    ":relaxed:",
    ":relieved:",
    ":repeat:",
    ":restroom:",
    ":revolving_hearts:",
    ":ribbon:",
    ":rice:",
    ":ring:",
    ":rocket:",
    ":rooster:",
    ":rose:",
    ":rotating_light:",
    ":rugby_football:",
    ":runner:",
    ":running_shirt_with_sash:",
    ":sagittarius:",
    ":sailboat:",
    ":sake:",
    ":sandal:",
    ":santa:",
    ":satellite:",
    ":saxophone:",
    ":school:",
    ":school_satchel:",
    ":scissors:",
    ":scorpius:",
    ":scream:",
    ":scream_cat:",
    ":scroll:",
    ":seat:",
    ":see_no_evil:",
    ":seedling:",
    ":shaved_ice:",
    ":sheep:",
    ":shell:",
    ":ship:",
    ":shirt:",
    ":shit:",
    ":shower:",
    ":signal_strength:",
    ":six:",
    ":ski:",
    ":skull:",
    ":sleeping:",
    ":sleepy:",
    ":slot_machine:",
    ":small_blue_diamond:",
    ":smile:",
    ":smile_cat:",
    ":smiley:",
    ":smiley_cat:",
    ":smiling_imp:",
    ":smirk:",
    ":smoking:",
    ":snail:",
    ":snake:",
    ":snowboarder:",
    ":snowflake:",
    ":snowman:",
    ":sob:",
    ":soccer:",
    ":soon:",
    ":sos:",
    ":sound:",
    ":space_invader:",
    ":spades:",
    ":spaghetti:",
    ":sparkler:",
    ":sparkles:",
    ":sparkling_heart:",
    ":speak_no_evil:",
    ":speech_balloon:",
    ":speedboat:",
    ":star:",
    ":star2:",
    ":stars:",
    ":station:",
    ":statue_of_liberty:",
    ":stew:",
    ":straight_ruler:",
    ":strawberry:",
    ":stuck_out_tongue:",
    ":stuck_out_tongue_closed_eyes:",
    ":stuck_out_tongue_winking_eye:",
    ":sun_with_face:",
    ":sunflower:",
    ":sunglasses:",
    ":sunny:",
    ":sunrise:",
    ":surfer:",
    ":sushi:",
    ":sweat:",
    ":sweat_drops:",
    ":sweat_smile:",
    ":sweet_potato:",
    ":swimmer:",
    ":symbols:",
    ":syringe:",
    ":tada:",
    ":tanabata_tree:",
    ":tangerine:",
    ":taurus:",
    ":taxi:",
    ":tea:",
    ":telephone:",
    ":telescope:",
    ":tennis:",
    ":tent:",
    ":thought_balloon:",
    ":three:",
    ":thumbsdown:",
    ":thumbsup:",
    ":ticket:",
    ":tiger:",
    ":tired_face:",
    ":tm:",
    ":toilet:",
    ":tomato:",
    ":tongue:",
    ":top:",
    ":tophat:",
    ":tractor:",
    ":traffic_light:",
    ":train:",
    ":trophy:",
    ":tropical_drink:",
    ":tropical_fish:",
    ":truck:",
    ":trumpet:",
    ":tulip:",
    ":turtle:",
    ":tv:",
    ":two:",
    ":two_hearts:",
    ":umbrella:",
    ":unamused:",
    ":unlock:",
    ":up:",
    ":us:",
    ":v:",
    ":vhs:",
    ":violin:",
    ":virgo:",
    ":volcano:",
    ":vs:",
    ":walking:",
    ":warning:",
    ":watch:",
    ":watermelon:",
    ":wave:",
    ":wavy_dash:",
    ":waxing_crescent_moon:",
    ":wc:",
    ":weary:",
    ":wedding:",
    ":whale:",
    ":wheelchair:",
    ":white_check_mark:",
    ":white_flower:",
    ":wind_chime:",
    ":wine_glass:",
    ":wink:",
    ":wolf:",
    ":woman:",
    ":womans_hat:",
    ":worried:",
    ":wrench:",
    ":x:",
    ":yellow_heart:",
    ":yen:",
    ":yum:",
    ":zap:",
    ":zzz:",
];
